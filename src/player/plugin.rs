//! Player plugin wiring input collection and the per-frame session tick.
use bevy::prelude::*;

use crate::{
    core::FrameSet,
    player::{
        components::KeyBindings,
        events::DialogToggledEvent,
        systems::{advance_session, collect_keyboard_input, collect_pointer_input, init_session},
    },
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .add_message::<DialogToggledEvent>()
            .add_systems(Startup, init_session)
            .add_systems(
                Update,
                (
                    (collect_keyboard_input, collect_pointer_input).in_set(FrameSet::Input),
                    advance_session.in_set(FrameSet::Simulate),
                ),
            );
    }
}
