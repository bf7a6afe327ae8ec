//! Messages emitted when the session opens or closes the dialog.
use bevy::prelude::Message;

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum DialogToggledEvent {
    Opened {
        zone: usize,
        title: String,
        text: String,
    },
    Closed {
        zone: usize,
    },
}
