//! Rendering: the adapter seam plus the engine-driven and recording adapters.
pub mod adapter;
pub mod plugin;
pub mod recorder;
pub mod sprite;
pub mod systems;

pub use plugin::RenderPlugin;
