// src/ui/mod.rs
//
// UI module providing screen-space elements layered over the world.
//
// Current features:
// - Dialog panel (bottom-centered terminal title + text)

pub mod dialog_panel;

// Re-export the main plugin
pub use dialog_panel::UiPlugin;
