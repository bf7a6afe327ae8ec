// src/ui/dialog_panel/components.rs
//
// Components and resources for the terminal dialog panel.

use bevy::prelude::*;

/// Root node of the dialog panel. Hidden until a terminal is opened.
#[derive(Component, Debug, Default)]
pub struct DialogPanel {
    /// Zone currently shown, if any.
    pub zone: Option<usize>,
}

/// Text node holding the terminal title.
#[derive(Component, Debug)]
pub struct DialogTitle;

/// Text node holding the terminal body text.
#[derive(Component, Debug)]
pub struct DialogBody;

/// Resource containing layout settings for the dialog panel.
#[derive(Resource, Debug)]
pub struct DialogPanelSettings {
    /// Panel width (pixels).
    pub panel_width: f32,

    /// Padding inside panel (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Offset from bottom edge of screen (pixels).
    pub bottom_offset: f32,

    /// Font size for the terminal title (points).
    pub title_font_size: f32,

    /// Font size for the body text (points).
    pub text_font_size: f32,

    /// Font size for the close hint (points).
    pub hint_font_size: f32,
}

impl Default for DialogPanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 560.0,
            padding: 16.0,
            border_width: 2.0,
            bottom_offset: 32.0,
            title_font_size: 20.0,
            text_font_size: 16.0,
            hint_font_size: 12.0,
        }
    }
}
