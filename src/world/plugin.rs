//! WorldPlugin spawns the follow camera and keeps it trailing the player.
use bevy::prelude::*;

use crate::{
    core::FrameSet,
    world::systems::{follow_player, spawn_follow_camera},
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_follow_camera)
            .add_systems(Update, follow_player.in_set(FrameSet::Present));
    }
}
