//! Player module - feeds keyboard and pointer input into the session and ticks it.

pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
