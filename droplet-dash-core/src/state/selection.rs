/// Highlighted row of the droplet list.
///
/// `selected` always stays inside `0..len` once [`clamp`](Self::clamp) has been
/// called for the current length. `active` is false until the user moves the
/// highlight and after [`clear`](Self::clear); actions need an active selection.
/// The first move on an inactive tracker only brings the highlight back at the
/// kept index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: usize,
    active: bool,
}

impl SelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The selected index if a row is highlighted and `len` still covers it.
    #[must_use]
    pub fn index_in(&self, len: usize) -> Option<usize> {
        (self.active && self.selected < len).then_some(self.selected)
    }

    /// Move down one row, stopping at the last row.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let target = if self.active {
            self.selected.saturating_add(1)
        } else {
            self.selected
        };
        self.selected = target.min(len - 1);
        self.active = true;
    }

    /// Move up one row, stopping at the first row.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let target = if self.active {
            self.selected.saturating_sub(1)
        } else {
            self.selected
        };
        self.selected = target.min(len - 1);
        self.active = true;
    }

    pub fn first(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = 0;
        self.active = true;
    }

    pub fn last(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = len - 1;
        self.active = true;
    }

    /// Highlight `index`, clamped to the last row.
    pub fn select(&mut self, index: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = index.min(len - 1);
        self.active = true;
    }

    /// Drop the highlight. The index is kept so the next move starts from it.
    pub fn clear(&mut self) {
        self.active = false;
    }

    /// Pull the index back into `0..len` after the list changed.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.active = false;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
