//! Text editing core for LibreNote.
//!
//! - [`TextBuffer`]: rope-backed content plus the insertion and selection marks
//! - [`Selection`]: normalized `start..end` character range
//! - [`Position`] and the position index functions: offset ⇄ (line, column)
//! - [`Clipboard`]: collaborator used by cut/copy/paste
//!
//! # Example
//!
//! ```
//! use librenote::editable::{offset_to_line_col, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_text("hello\nworld");
//! buffer.place_cursor(8);
//! buffer.insert_at_cursor("!");
//!
//! assert_eq!(buffer.text(), "hello\nwo!rld");
//! assert_eq!(offset_to_line_col(&buffer, buffer.insertion()).unwrap(), (2, 4));
//! ```

mod buffer;
mod clipboard;
mod position;
mod selection;

pub use buffer::TextBuffer;
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use position::{
    line_col_to_offset, line_length, offset_to_line_col, offset_to_position, Position,
};
pub use selection::Selection;
