//! World module housing the follow camera.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
