//! Index cycling for the full-screen gallery viewer.

/// Index after `current`, wrapping from last to first.
///
/// Returns `None` for an empty gallery.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + 1) % len)
}

/// Index before `current`, wrapping from first to last.
///
/// Returns `None` for an empty gallery.
pub fn previous_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + len - 1) % len)
}

/// Which image, if any, the viewer is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    selected: Option<usize>,
}

impl Lightbox {
    /// A closed viewer over `len` images.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
        }
    }

    /// Show image `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.selected = Some(index);
        }
    }

    /// Hide the viewer.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Advance to the next image. No-op while closed.
    pub fn next(&mut self) {
        if let Some(current) = self.selected {
            self.selected = next_index(current, self.len);
        }
    }

    /// Go back to the previous image. No-op while closed.
    pub fn previous(&mut self) {
        if let Some(current) = self.selected {
            self.selected = previous_index(current, self.len);
        }
    }

    /// Currently shown image.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether an image is shown.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
