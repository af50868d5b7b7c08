//! Text buffer for the editor: a rope plus the marks that track it.
//!
//! All offsets are character indices (Unicode scalar values), never bytes.
//! Every mark (insertion point and both selection bounds) stays within
//! `[0, len_chars()]`; an offset equal to `len_chars()` is the end of document.

use ropey::Rope;

use super::selection::{shift_mark_for_delete, shift_mark_for_insert, Selection};
use crate::error::EditorError;

/// The document text and its insertion/selection marks.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    insertion: usize,
    selection: Selection,
    /// Incremented on every content mutation
    revision: u64,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a buffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            insertion: 0,
            selection: Selection::collapsed(0),
            revision: 0,
        }
    }

    /// Access the underlying Rope for read-only queries
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Offset where typed or pasted input is applied
    pub fn insertion(&self) -> usize {
        self.insertion
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the whole content. Resets the insertion point to 0 and clears the selection.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.insertion = 0;
        self.selection = Selection::collapsed(0);
        self.bump_revision();
    }

    /// Full content as String
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text in `start..end` (end exclusive). The whole document is `0..len_chars()`.
    pub fn text_range(&self, start: usize, end: usize) -> Result<String, EditorError> {
        self.check_range(start, end)?;
        Ok(self.rope.slice(start..end).to_string())
    }

    /// Currently selected text, None when the selection is empty
    pub fn selected_text(&self) -> Option<String> {
        if self.selection.is_empty() {
            return None;
        }
        Some(
            self.rope
                .slice(self.selection.start()..self.selection.end())
                .to_string(),
        )
    }

    /// Select `start..end` in either order. Out-of-range offsets are clamped,
    /// never rejected. The insertion point moves to the (clamped) first argument.
    pub fn select_range(&mut self, start: usize, end: usize) {
        let len = self.len_chars();
        let start = start.min(len);
        let end = end.min(len);
        self.selection = Selection::new(start, end);
        self.insertion = start;
    }

    pub fn select_all(&mut self) {
        self.select_range(0, self.len_chars());
    }

    /// Move the insertion point and collapse the selection there (clamped)
    pub fn place_cursor(&mut self, offset: usize) {
        let offset = offset.min(self.len_chars());
        self.insertion = offset;
        self.selection = Selection::collapsed(offset);
    }

    /// Insert text at a character offset. Marks at or after `offset` shift right.
    pub fn insert_at(&mut self, offset: usize, text: &str) -> Result<(), EditorError> {
        let len = self.len_chars();
        if offset > len {
            return Err(EditorError::Range {
                start: offset,
                end: offset,
                len,
            });
        }
        if text.is_empty() {
            return Ok(());
        }

        let inserted = text.chars().count();
        self.rope.insert(offset, text);
        self.insertion = shift_mark_for_insert(self.insertion, offset, inserted);
        self.selection.shift_for_insert(offset, inserted);
        self.bump_revision();
        Ok(())
    }

    /// Remove `start..end`. An empty range is a no-op.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<(), EditorError> {
        self.check_range(start, end)?;
        if start == end {
            return Ok(());
        }

        self.rope.remove(start..end);
        self.insertion = shift_mark_for_delete(self.insertion, start, end);
        self.selection.shift_for_delete(start, end);
        self.bump_revision();
        Ok(())
    }

    /// Delete the selected text, returning it
    pub fn delete_selection(&mut self) -> Option<String> {
        let text = self.selected_text()?;
        let (start, end) = (self.selection.start(), self.selection.end());
        self.rope.remove(start..end);
        self.insertion = shift_mark_for_delete(self.insertion, start, end);
        self.selection = Selection::collapsed(start);
        self.bump_revision();
        Some(text)
    }

    /// Typing: replace the selection (if any), then insert at the insertion point.
    /// The insertion point ends up after the inserted text.
    pub fn insert_at_cursor(&mut self, text: &str) {
        self.delete_selection();
        let at = self.insertion;
        // `at` is a mark, so it is always within bounds
        if self.insert_at(at, text).is_ok() {
            self.selection = Selection::collapsed(self.insertion);
        }
    }

    /// Backspace: delete the selection, or the character before the insertion point.
    /// Returns false when there was nothing to delete.
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        let at = self.insertion;
        if at == 0 {
            return false;
        }
        self.delete_range(at - 1, at).is_ok()
    }

    /// Panic if a mark has escaped the buffer (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let len = self.len_chars();
        assert!(
            self.insertion <= len,
            "[{}] insertion {} beyond buffer length {}",
            context,
            self.insertion,
            len
        );
        assert!(
            self.selection.end() <= len,
            "[{}] selection {}..{} beyond buffer length {}",
            context,
            self.selection.start(),
            self.selection.end(),
            len
        );
    }

    fn check_range(&self, start: usize, end: usize) -> Result<(), EditorError> {
        let len = self.len_chars();
        if start > end || end > len {
            return Err(EditorError::Range { start, end, len });
        }
        Ok(())
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
