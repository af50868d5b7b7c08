//! Clipboard collaborator and the buffer's cut/copy/paste operations.
//!
//! The buffer never talks to the OS clipboard directly; it goes through the
//! [`Clipboard`] trait so headless use and tests can swap in [`MemoryClipboard`].

use super::buffer::TextBuffer;

/// Source and sink for clipboard text
pub trait Clipboard: Send {
    /// Current clipboard text, None if empty or unavailable
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard text
    fn set_text(&mut self, text: &str);
}

/// The OS clipboard, via arboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => clipboard.get_text().ok(),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    tracing::warn!("Failed to write clipboard: {}", e);
                }
            }
            Err(e) => tracing::warn!("Clipboard unavailable: {}", e),
        }
    }
}

/// Process-local clipboard
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

impl TextBuffer {
    /// Copy the selection to the clipboard. Returns the number of characters copied.
    pub fn copy_selection(&self, clipboard: &mut dyn Clipboard) -> usize {
        match self.selected_text() {
            Some(text) => {
                clipboard.set_text(&text);
                self.selection().len()
            }
            None => 0,
        }
    }

    /// Copy the selection to the clipboard and delete it. Returns the number of characters cut.
    pub fn cut_selection(&mut self, clipboard: &mut dyn Clipboard) -> usize {
        let count = self.selection().len();
        match self.delete_selection() {
            Some(text) => {
                clipboard.set_text(&text);
                count
            }
            None => 0,
        }
    }

    /// Insert the clipboard text at the insertion point, replacing any selection.
    /// Returns the number of characters pasted.
    pub fn paste_at_cursor(&mut self, clipboard: &mut dyn Clipboard) -> usize {
        let Some(text) = clipboard.get_text() else {
            return 0;
        };
        if text.is_empty() {
            return 0;
        }
        self.insert_at_cursor(&text);
        text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_leaves_buffer_untouched() {
        let mut buf = TextBuffer::from_text("hello world");
        buf.select_range(0, 5);
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(buf.copy_selection(&mut clipboard), 5);
        assert_eq!(clipboard.contents(), Some("hello"));
        assert_eq!(buf.text(), "hello world");
    }

    #[test]
    fn test_copy_without_selection_does_nothing() {
        let buf = TextBuffer::from_text("hello");
        let mut clipboard = MemoryClipboard::with_text("keep");
        assert_eq!(buf.copy_selection(&mut clipboard), 0);
        assert_eq!(clipboard.contents(), Some("keep"));
    }

    #[test]
    fn test_cut_then_paste_moves_text() {
        let mut buf = TextBuffer::from_text("hello world");
        let mut clipboard = MemoryClipboard::new();
        buf.select_range(5, 11);
        assert_eq!(buf.cut_selection(&mut clipboard), 6);
        assert_eq!(buf.text(), "hello");

        buf.place_cursor(0);
        assert_eq!(buf.paste_at_cursor(&mut clipboard), 6);
        assert_eq!(buf.text(), " worldhello");
        assert_eq!(buf.insertion(), 6);
    }

    #[test]
    fn test_paste_replaces_selection() {
        let mut buf = TextBuffer::from_text("one two three");
        buf.select_range(4, 7);
        let mut clipboard = MemoryClipboard::with_text("2");
        buf.paste_at_cursor(&mut clipboard);
        assert_eq!(buf.text(), "one 2 three");
    }

    #[test]
    fn test_paste_empty_clipboard_is_noop() {
        let mut buf = TextBuffer::from_text("abc");
        let rev = buf.revision();
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(buf.paste_at_cursor(&mut clipboard), 0);
        assert_eq!(buf.revision(), rev);
    }
}
