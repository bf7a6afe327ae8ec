//! Systems that spawn the scene sprites and push each session frame through an adapter.
use bevy::prelude::*;

use crate::{
    assets::{AssetHandles, AssetStatus},
    render::{
        adapter::{render_frame, DrawKind, Visual},
        recorder::FrameRecorder,
        sprite::{SceneSpriteQuery, SpriteAdapter},
    },
    session::InteractionLoop,
};

/// Spawns one sprite per drawable; the first draw pass positions and skins them.
pub fn spawn_scene_sprites(mut commands: Commands, session: Res<InteractionLoop>) {
    commands.spawn((
        Sprite::default(),
        Transform::default(),
        DrawKind::Background,
        Name::new("Background"),
    ));

    for (index, zone) in session.zones().iter().enumerate() {
        commands.spawn((
            Sprite::default(),
            Transform::default(),
            DrawKind::Zone(index),
            Name::new(format!("Terminal {}", zone.title())),
        ));
    }

    commands.spawn((
        Sprite::default(),
        Transform::default(),
        DrawKind::Player,
        Name::new("Player"),
    ));
}

/// Draws the current session state through the sprite adapter.
pub fn draw_session(
    session: Res<InteractionLoop>,
    status: Res<AssetStatus>,
    handles: Res<AssetHandles>,
    images: Res<Assets<Image>>,
    mut sprites: SceneSpriteQuery,
) {
    let mut adapter = SpriteAdapter::new(&handles, &images, &mut sprites);
    render_frame(&session, &status, &mut adapter);
}

/// Records the opening frame headlessly and reports how it will look.
pub fn log_first_frame(session: Res<InteractionLoop>, status: Res<AssetStatus>) {
    let mut recorder = FrameRecorder::default();
    render_frame(&session, &status, &mut recorder);

    let placeholders = recorder
        .drawn()
        .iter()
        .filter(|drawable| matches!(drawable.visual, Visual::Fallback(_)))
        .count();

    #[cfg(feature = "core_debug")]
    {
        match recorder.to_json() {
            Ok(json) => info!(target: "core_debug", "First frame draw list: {}", json),
            Err(err) => warn!(target: "core_debug", "Failed to encode draw list: {}", err),
        }
    }

    info!(
        "First frame: {} draw calls ({} placeholders)",
        recorder.drawn().len(),
        placeholders
    );
}
