//! Components used by the world module.
use bevy::prelude::*;

/// Marker for the 2D camera that trails the player.
#[derive(Component, Debug)]
pub struct FollowCamera {
    /// Fraction of the remaining distance covered each frame.
    pub lerp: f32,
}

impl FollowCamera {
    pub fn new(lerp: f32) -> Self {
        Self {
            lerp: lerp.clamp(0.0, 1.0),
        }
    }
}
