use std::path::Path;

use bevy::prelude::*;

mod assets;
mod core;
mod player;
mod render;
mod session;
mod ui;
mod world;

use crate::{
    assets::AssetLoadPlugin,
    core::{
        config::{apply_env_file, LOCAL_ENV_FILE},
        CorePlugin,
    },
    player::PlayerPlugin,
    render::RenderPlugin,
    ui::UiPlugin,
    world::WorldPlugin,
};

fn main() {
    // Runs before LogPlugin exists, so errors go straight to stderr.
    if let Err(err) = apply_env_file(Path::new(LOCAL_ENV_FILE)) {
        eprintln!("Ignoring {}: {}", LOCAL_ENV_FILE, err);
    }

    App::new()
        .add_plugins((
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "devfolio".to_string(),
                        ..default()
                    }),
                    ..default()
                }),
            CorePlugin::default(), // Loads config; other plugins read WalkConfig
            AssetLoadPlugin,
            PlayerPlugin,
            RenderPlugin,
            WorldPlugin,
            UiPlugin,
        ))
        .run();
}
