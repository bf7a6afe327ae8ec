//! AssetLoadPlugin requests the images at startup and resolves them during the loading phase.
use bevy::prelude::*;

use crate::{
    assets::systems::{request_asset_loads, resolve_asset_loads},
    core::AppPhase,
};

pub struct AssetLoadPlugin;

impl Plugin for AssetLoadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, request_asset_loads).add_systems(
            Update,
            resolve_asset_loads.run_if(in_state(AppPhase::Loading)),
        );
    }
}
