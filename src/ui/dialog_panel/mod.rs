// src/ui/dialog_panel/mod.rs
//
// Dialog panel module showing the open terminal's title and text.

pub mod components;
pub mod plugin;
pub mod systems;

// Re-export the plugin
pub use plugin::UiPlugin;
