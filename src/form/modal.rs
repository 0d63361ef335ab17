//! Visibility of the note modal.

/// The modal container's visibility flag.
///
/// Only the form controller toggles it; everything else can just look.
#[derive(Debug, Default)]
pub struct Modal {
    visible: bool,
}

impl Modal {
    pub(super) fn show(&mut self) {
        self.visible = true;
    }

    pub(super) fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
