//! Selection type for the text buffer.

/// A normalized selection over character offsets, `start <= end`.
/// The end offset is exclusive; `start == end` means nothing is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Create a selection from two offsets in either order
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed selection (no text selected)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Check if selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Adjust both bounds for `inserted` characters added at `at`
    pub(crate) fn shift_for_insert(&mut self, at: usize, inserted: usize) {
        self.start = shift_mark_for_insert(self.start, at, inserted);
        self.end = shift_mark_for_insert(self.end, at, inserted);
    }

    /// Adjust both bounds for the removal of `start..end`
    pub(crate) fn shift_for_delete(&mut self, start: usize, end: usize) {
        self.start = shift_mark_for_delete(self.start, start, end);
        self.end = shift_mark_for_delete(self.end, start, end);
    }
}

/// Marks at or after the insertion point move right; marks before it stay.
pub(crate) fn shift_mark_for_insert(mark: usize, at: usize, inserted: usize) -> usize {
    if mark >= at {
        mark + inserted
    } else {
        mark
    }
}

/// Marks after the removed range move left; marks inside it collapse to its start.
pub(crate) fn shift_mark_for_delete(mark: usize, start: usize, end: usize) -> usize {
    if mark >= end {
        mark - (end - start)
    } else if mark > start {
        start
    } else {
        mark
    }
}
