//! CorePlugin loads the walk configuration and wires the app phases and per-frame ordering.
use std::path::PathBuf;

use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;

use crate::core::config::WalkConfig;
#[cfg(feature = "core_debug")]
use crate::session::{InteractionLoop, MovableBody};

/// Top-level lifecycle: images resolve first, then the walk loop runs.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppPhase {
    #[default]
    Loading,
    Running,
}

/// Per-frame ordering: input → session tick → render → presentation (camera, UI).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulate,
    Render,
    Present,
}

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Registers the configuration resource, app phases and frame sets.
#[derive(Debug, Clone)]
pub struct CorePlugin {
    config_path: PathBuf,
}

impl CorePlugin {
    /// Creates a CorePlugin reading its configuration from `path`.
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::with_config_path(WalkConfig::resolve_path())
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let config = WalkConfig::load_or_default(&self.config_path);
        info!(
            "Walk configured: world {:.0}x{:.0}, player {:.0}x{:.0} at {:.2} units/frame, {} terminals, {:?}",
            config.world.x,
            config.world.y,
            config.player.size.x,
            config.player.size.y,
            config.player.speed,
            config.zones.len(),
            config.proximity,
        );

        app.insert_resource(config)
            .init_state::<AppPhase>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Simulate,
                    FrameSet::Render,
                    FrameSet::Present,
                )
                    .chain()
                    .run_if(in_state(AppPhase::Running)),
            )
            .add_systems(OnEnter(AppPhase::Running), log_running);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default()).add_systems(
                Update,
                log_session_ticks.in_set(FrameSet::Present),
            );
        }
    }
}

fn log_running(config: Res<WalkConfig>) {
    info!(
        "Walk loop running (click-to-move {})",
        if config.click_to_move.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
}

#[cfg(feature = "core_debug")]
fn log_session_ticks(
    mut timer: ResMut<DebugTickTimer>,
    time: Res<Time>,
    session: Res<InteractionLoop>,
) {
    if timer.timer.tick(time.delta()).just_finished() {
        let position = session.player().position();
        info!(
            target: "core_debug",
            "Frame {} | player ({:.1}, {:.1}) | dialog: {} | pointer target: {:?}",
            session.frames(),
            position.x,
            position.y,
            session.dialog().title().unwrap_or("-"),
            session.input().pointer_target(),
        );
    }
}
