//! Walk configuration: world size, player tuning, interaction mode, assets and terminals.
use std::{
    env, fmt, fs, io,
    path::{Path, PathBuf},
};

use bevy::prelude::*;
use serde::Deserialize;

use crate::session::{
    zone::{default_zones, DEFAULT_INTERACTION_RADIUS, TERMINAL_SIZE},
    ClickToMove, ProximityTest, SessionSetup, Zone,
};

pub const CONFIG_PATH: &str = "config/walk.toml";

/// Environment variable overriding [`CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "DEVFOLIO_CONFIG";

/// Optional `KEY=value` file read before the app starts (e.g. to set [`CONFIG_PATH_ENV`]).
pub const LOCAL_ENV_FILE: &str = "local.env";

const MIN_EXTENT: f32 = 1.0;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawWalkConfig {
    #[serde(default)]
    world: RawWorldSection,
    #[serde(default)]
    player: RawPlayerSection,
    #[serde(default)]
    interaction: RawInteractionSection,
    #[serde(default)]
    pointer: RawPointerSection,
    #[serde(default)]
    camera: RawCameraSection,
    #[serde(default)]
    assets: RawAssetsSection,
    #[serde(default)]
    zones: Vec<RawZone>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawWorldSection {
    width: f32,
    height: f32,
}

impl Default for RawWorldSection {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 1200.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPlayerSection {
    width: f32,
    height: f32,
    speed: f32,
}

impl Default for RawPlayerSection {
    fn default() -> Self {
        Self {
            width: 80.0,
            height: 80.0,
            speed: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum RawProximityMode {
    #[default]
    Radius,
    Overlap,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawInteractionSection {
    mode: RawProximityMode,
    radius: f32,
}

impl Default for RawInteractionSection {
    fn default() -> Self {
        Self {
            mode: RawProximityMode::Radius,
            radius: DEFAULT_INTERACTION_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPointerSection {
    enabled: bool,
    arrive_threshold: f32,
}

impl Default for RawPointerSection {
    fn default() -> Self {
        let defaults = ClickToMove::default();
        Self {
            enabled: defaults.enabled,
            arrive_threshold: defaults.arrive_threshold,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCameraSection {
    follow_lerp: f32,
}

impl Default for RawCameraSection {
    fn default() -> Self {
        Self { follow_lerp: 0.1 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAssetsSection {
    player: String,
    terminal: String,
    background: String,
}

impl Default for RawAssetsSection {
    fn default() -> Self {
        Self {
            player: "player.png".to_string(),
            terminal: "terminal.png".to_string(),
            background: "dirtandgrasstileset.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawZone {
    x: f32,
    y: f32,
    #[serde(default = "default_zone_extent")]
    width: f32,
    #[serde(default = "default_zone_extent")]
    height: f32,
    title: String,
    #[serde(default)]
    text: String,
}

fn default_zone_extent() -> f32 {
    TERMINAL_SIZE
}

/// Image paths, relative to Bevy's `assets/` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub player: String,
    pub terminal: String,
    pub background: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub size: Vec2,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub follow_lerp: f32,
}

/// Runtime configuration derived from `config/walk.toml`.
#[derive(Resource, Debug, Clone)]
pub struct WalkConfig {
    pub world: Vec2,
    pub player: PlayerSettings,
    pub proximity: ProximityTest,
    pub click_to_move: ClickToMove,
    pub camera: CameraSettings,
    pub assets: AssetPaths,
    pub zones: Vec<Zone>,
}

impl WalkConfig {
    /// Path from `DEVFOLIO_CONFIG`, or the bundled default.
    pub fn resolve_path() -> PathBuf {
        env::var(CONFIG_PATH_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_PATH))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawWalkConfig>(data).map(Into::into)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{}. Falling back to defaults.", err);
                Self::default()
            }
        }
    }

    pub fn session_setup(&self) -> SessionSetup {
        SessionSetup {
            world: self.world,
            player_size: self.player.size,
            player_speed: self.player.speed,
            zones: self.zones.clone(),
            proximity: self.proximity,
            click_to_move: self.click_to_move,
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        RawWalkConfig::default().into()
    }
}

impl From<RawWalkConfig> for WalkConfig {
    fn from(value: RawWalkConfig) -> Self {
        let world = Vec2::new(
            value.world.width.max(MIN_EXTENT),
            value.world.height.max(MIN_EXTENT),
        );

        let player = PlayerSettings {
            size: Vec2::new(
                value.player.width.clamp(MIN_EXTENT, world.x),
                value.player.height.clamp(MIN_EXTENT, world.y),
            ),
            speed: value.player.speed.max(0.0),
        };

        let proximity = match value.interaction.mode {
            RawProximityMode::Radius => ProximityTest::Radius {
                threshold: value.interaction.radius.max(f32::EPSILON),
            },
            RawProximityMode::Overlap => ProximityTest::Overlap,
        };

        let click_to_move = ClickToMove {
            enabled: value.pointer.enabled,
            arrive_threshold: value.pointer.arrive_threshold.max(0.0),
        };

        let camera = CameraSettings {
            follow_lerp: value.camera.follow_lerp.clamp(0.01, 1.0),
        };

        let assets = AssetPaths {
            player: value.assets.player,
            terminal: value.assets.terminal,
            background: value.assets.background,
        };

        let zones = if value.zones.is_empty() {
            default_zones(world)
        } else {
            value
                .zones
                .into_iter()
                .map(|zone| {
                    Zone::centered_at(
                        Vec2::new(zone.x, zone.y),
                        Vec2::new(zone.width.max(MIN_EXTENT), zone.height.max(MIN_EXTENT)),
                        zone.title.trim(),
                        zone.text,
                    )
                })
                .collect()
        };

        Self {
            world,
            player,
            proximity,
            click_to_move,
            camera,
            assets,
            zones,
        }
    }
}

/// Exports the variables in `path` without overriding ones already set.
///
/// Returns `Ok(false)` when the file does not exist.
pub fn apply_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(err),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Failed to read {} ({})", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "Failed to parse {} ({})", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_defaults() {
        let config = WalkConfig::default();

        assert_eq!(config.world, Vec2::new(1600.0, 1200.0));
        assert_eq!(config.player.size, Vec2::splat(80.0));
        assert_eq!(
            config.proximity,
            ProximityTest::Radius { threshold: 60.0 }
        );
        assert_eq!(config.zones.len(), 3);
        assert_eq!(config.zones[0].title(), "ABOUT_ME.TXT");
        assert_eq!(config.assets.background, "dirtandgrasstileset.png");
    }

    #[test]
    fn parses_sections_and_custom_zones() {
        let config = WalkConfig::parse(
            r#"
            [world]
            width = 800
            height = 600

            [interaction]
            mode = "overlap"

            [pointer]
            enabled = false

            [[zones]]
            x = 10
            y = 20
            title = "  RESUME.PDF "
            text = "Hire me."
            "#,
        )
        .expect("valid config");

        assert_eq!(config.world, Vec2::new(800.0, 600.0));
        assert_eq!(config.proximity, ProximityTest::Overlap);
        assert!(!config.click_to_move.enabled);
        assert_eq!(config.zones.len(), 1);
        assert_eq!(config.zones[0].title(), "RESUME.PDF");
        assert_eq!(config.zones[0].size(), Vec2::splat(TERMINAL_SIZE));
        assert_eq!(config.zones[0].center(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn bundled_config_matches_default_layout() {
        let bundled = WalkConfig::parse(include_str!("../../config/walk.toml"))
            .expect("bundled config parses");

        assert_eq!(bundled.zones, WalkConfig::default().zones);
    }

    #[test]
    fn sanitises_out_of_range_values() {
        let config = WalkConfig::parse(
            r#"
            [world]
            width = 100
            height = -5

            [player]
            width = 500
            speed = -3

            [camera]
            follow_lerp = 7
            "#,
        )
        .expect("valid config");

        assert_eq!(config.world, Vec2::new(100.0, 1.0));
        assert_eq!(config.player.size, Vec2::new(100.0, 1.0));
        assert_eq!(config.player.speed, 0.0);
        assert_eq!(config.camera.follow_lerp, 1.0);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        assert!(WalkConfig::parse("[interaction]\nmode = \"nearest\"").is_err());
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("devfolio-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn env_file_is_optional() {
        let applied = apply_env_file(Path::new("config/no-such.env")).expect("missing is fine");
        assert!(!applied);
    }

    #[test]
    fn env_file_exports_without_overriding() {
        let path = scratch_file(
            "exports.env",
            "DEVFOLIO_TEST_FRESH=from-file\nDEVFOLIO_TEST_SET=from-file\n",
        );
        env::set_var("DEVFOLIO_TEST_SET", "from-shell");

        let applied = apply_env_file(&path).expect("valid env file");
        fs::remove_file(&path).ok();

        assert!(applied);
        assert_eq!(env::var("DEVFOLIO_TEST_FRESH").as_deref(), Ok("from-file"));
        assert_eq!(env::var("DEVFOLIO_TEST_SET").as_deref(), Ok("from-shell"));
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let path = scratch_file("broken.env", "DEVFOLIO_TEST_BROKEN='unterminated\n");

        let result = apply_env_file(&path);
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = WalkConfig::load(Path::new("config/does-not-exist.toml"))
            .expect_err("file should be missing");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("does-not-exist.toml"));
    }
}
