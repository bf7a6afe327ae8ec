//! Open/closed state of the single dialog box.
use super::zone::Zone;

/// Content currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownDialog {
    pub zone: usize,
    pub title: String,
    pub text: String,
}

/// At most one dialog is visible at a time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DialogState {
    shown: Option<ShownDialog>,
}

impl DialogState {
    pub fn is_active(&self) -> bool {
        self.shown.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.shown.as_ref().map(|shown| shown.title.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.shown.as_ref().map(|shown| shown.text.as_str())
    }

    /// Shows `zone`. Refuses (returns false) while another dialog is open.
    pub(super) fn open(&mut self, index: usize, zone: &Zone) -> bool {
        if self.shown.is_some() {
            return false;
        }
        self.shown = Some(ShownDialog {
            zone: index,
            title: zone.title().to_owned(),
            text: zone.text().to_owned(),
        });
        true
    }

    /// Hides the dialog, returning the index of the zone it was showing.
    pub(super) fn close(&mut self) -> Option<usize> {
        self.shown.take().map(|shown| shown.zone)
    }
}
