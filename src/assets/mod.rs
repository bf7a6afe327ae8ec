//! Image loading for the player, the terminals and the background.
pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{AssetHandles, AssetKind, AssetStatus};
pub use plugin::AssetLoadPlugin;
