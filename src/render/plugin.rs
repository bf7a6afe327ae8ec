//! RenderPlugin spawns the scene sprites and syncs them from the session every frame.
use bevy::prelude::*;

use crate::{
    core::{AppPhase, FrameSet},
    render::systems::{draw_session, log_first_frame, spawn_scene_sprites},
};

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppPhase::Running),
            (spawn_scene_sprites, log_first_frame),
        )
        .add_systems(Update, draw_session.in_set(FrameSet::Render));
    }
}
