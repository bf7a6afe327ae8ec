//! Systems that start the image loads and resolve them before the walk loop begins.
use bevy::{asset::LoadState, prelude::*};

use crate::{
    assets::components::{AssetHandles, AssetKind, AssetLoadFailure, AssetStatus, LoadResult},
    core::{config::WalkConfig, AppPhase},
};

/// Kicks off the three image loads.
pub fn request_asset_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<WalkConfig>,
) {
    let paths = &config.assets;
    info!(
        "Loading images: player '{}', terminal '{}', background '{}'",
        paths.player, paths.terminal, paths.background
    );

    commands.insert_resource(AssetHandles {
        player: asset_server.load(paths.player.clone()),
        terminal: asset_server.load(paths.terminal.clone()),
        background: asset_server.load(paths.background.clone()),
    });
}

/// Waits until every load has either finished or failed, then enters [`AppPhase::Running`].
pub fn resolve_asset_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    handles: Res<AssetHandles>,
    config: Res<WalkConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    let resolve = |kind: AssetKind| {
        let state = asset_server.load_state(handles.get(kind).id());
        classify_load_state(&state, kind, asset_path(&config, kind))
    };
    let (Some(player), Some(terminal), Some(background)) = (
        resolve(AssetKind::Player),
        resolve(AssetKind::Terminal),
        resolve(AssetKind::Background),
    ) else {
        return;
    };
    let status = AssetStatus::new(player, terminal, background);

    for failure in status.failures() {
        warn!("{}; drawing a placeholder rectangle instead", failure);
    }
    if status.failures().next().is_none() {
        info!("All images loaded");
    }

    commands.insert_resource(status);
    next_phase.set(AppPhase::Running);
}

/// `None` while the load is still pending.
pub fn classify_load_state(state: &LoadState, kind: AssetKind, path: &str) -> Option<LoadResult> {
    match state {
        LoadState::Loaded => Some(LoadResult::Loaded),
        LoadState::Failed(err) => Some(LoadResult::Failed(AssetLoadFailure {
            kind,
            path: path.to_string(),
            reason: err.to_string(),
        })),
        _ => None,
    }
}

fn asset_path(config: &WalkConfig, kind: AssetKind) -> &str {
    match kind {
        AssetKind::Player => &config.assets.player,
        AssetKind::Terminal => &config.assets.terminal,
        AssetKind::Background => &config.assets.background,
    }
}
