// src/ui/dialog_panel/plugin.rs
//
// UiPlugin coordinates dialog panel systems and resources.

use bevy::prelude::*;

use crate::core::FrameSet;

use super::components::DialogPanelSettings;
use super::systems::{apply_dialog_toggles, spawn_dialog_panel};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(DialogPanelSettings::default())
            .add_systems(Startup, spawn_dialog_panel)
            .add_systems(Update, apply_dialog_toggles.in_set(FrameSet::Present));
    }
}
