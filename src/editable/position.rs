//! Position index: translation between character offsets and (line, column).
//!
//! Positions are 0-indexed internally. The status bar reports them 1-based,
//! so `offset_to_line_col` does that conversion for display callers.
//! Only LF, CR and CRLF (counted once) break lines. Form feed, vertical tab,
//! NEL and U+2028 stay inside a line.

use super::buffer::TextBuffer;
use crate::error::EditorError;

/// A position in the text buffer (line and column, both 0-indexed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// (line, column) as shown to the user, both starting at 1
    pub const fn one_based(&self) -> (usize, usize) {
        (self.line + 1, self.column + 1)
    }
}

/// Convert a character offset to a 0-indexed position
pub fn offset_to_position(buffer: &TextBuffer, offset: usize) -> Result<Position, EditorError> {
    let rope = buffer.rope();
    let len = rope.len_chars();
    if offset > len {
        return Err(EditorError::OutOfRange { offset, len });
    }
    let line = rope.char_to_line(offset);
    let line_start = rope.line_to_char(line);
    Ok(Position::new(line, offset - line_start))
}

/// Convert a character offset to a 1-based (line, column) pair for display.
/// The empty document at offset 0 is line 1, column 1.
pub fn offset_to_line_col(buffer: &TextBuffer, offset: usize) -> Result<(usize, usize), EditorError> {
    offset_to_position(buffer, offset).map(|pos| pos.one_based())
}

/// Convert a 0-indexed (line, column) to a character offset.
/// Lines past the end map to the end of document; columns are clamped to the line length.
pub fn line_col_to_offset(buffer: &TextBuffer, line: usize, column: usize) -> usize {
    let rope = buffer.rope();
    if line >= rope.len_lines() {
        return rope.len_chars();
    }
    let line_start = rope.line_to_char(line);
    line_start + column.min(line_length(buffer, line))
}

/// Length of a line in characters, excluding its line break
pub fn line_length(buffer: &TextBuffer, line: usize) -> usize {
    let rope = buffer.rope();
    if line >= rope.len_lines() {
        return 0;
    }
    let slice = rope.line(line);
    let len = slice.len_chars();
    let mut trim = 0;
    if len > 0 && is_line_break(slice.char(len - 1)) {
        trim = 1;
        if slice.char(len - 1) == '\n' && len > 1 && slice.char(len - 2) == '\r' {
            trim = 2;
        }
    }
    len - trim
}

fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}
