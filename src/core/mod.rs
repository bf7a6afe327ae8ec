//! Core wiring: configuration, app phases and frame ordering.
pub mod config;
pub mod plugin;

pub use plugin::{AppPhase, CorePlugin, FrameSet};
