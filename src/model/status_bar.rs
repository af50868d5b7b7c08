//! Status bar model - segments synced from the editor state
//!
//! Left side: file name, modified indicator, transient message.
//! Right side: cursor position ("Line: L, Column: C") and the encoding label.

use crate::editable::offset_to_line_col;

use super::AppModel;

/// The single text encoding documents are read and written in
pub const ENCODING_LABEL: &str = "UTF-8";

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// File name display
    FileName,
    /// Modified indicator (e.g., "*")
    ModifiedIndicator,
    /// Transient status messages (e.g., "Saved")
    StatusMessage,
    /// Cursor position (e.g., "Line: 42, Column: 15")
    CursorPosition,
    /// Encoding label
    Encoding,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        self.display_text().is_empty()
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub content: SegmentContent,
}

impl StatusSegment {
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::FileName | SegmentId::ModifiedIndicator | SegmentId::StatusMessage => {
                SegmentPosition::Left
            }
            SegmentId::CursorPosition | SegmentId::Encoding => SegmentPosition::Right,
        };
        Self {
            id,
            position,
            content,
        }
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(
                    SegmentId::FileName,
                    SegmentContent::Text("Untitled".into()),
                ),
                StatusSegment::new(SegmentId::ModifiedIndicator, SegmentContent::Empty),
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                StatusSegment::new(
                    SegmentId::CursorPosition,
                    SegmentContent::Text("Line: 1, Column: 1".into()),
                ),
                StatusSegment::new(
                    SegmentId::Encoding,
                    SegmentContent::Text(ENCODING_LABEL.into()),
                ),
            ],
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.content = content;
        }
    }

    /// Text of a segment, "" when hidden
    pub fn text(&self, id: SegmentId) -> &str {
        self.get_segment(id)
            .map(|s| s.content.display_text())
            .unwrap_or("")
    }

    /// Render as a single line: left segments, then " | ", then right segments
    pub fn render_line(&self) -> String {
        let join = |position: SegmentPosition| {
            self.segments
                .iter()
                .filter(|s| s.position == position && !s.content.is_empty())
                .map(|s| s.content.display_text())
                .collect::<Vec<_>>()
                .join("  ")
        };
        format!("{} | {}", join(SegmentPosition::Left), join(SegmentPosition::Right))
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Format the cursor position segment text for a 1-based (line, column)
pub fn format_cursor_position(line: usize, column: usize) -> String {
    format!("Line: {}, Column: {}", line, column)
}

/// Sync status bar segments from the model after an update
pub fn sync_status_bar(model: &mut AppModel) {
    let filename = model.document.display_name();
    model
        .ui
        .status_bar
        .update_segment(SegmentId::FileName, SegmentContent::Text(filename));

    let modified = if model.document.is_modified {
        SegmentContent::Text("*".to_string())
    } else {
        SegmentContent::Empty
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::ModifiedIndicator, modified);

    let message = if model.ui.status_message.is_empty() {
        SegmentContent::Empty
    } else {
        SegmentContent::Text(model.ui.status_message.clone())
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::StatusMessage, message);

    let buffer = &model.document.buffer;
    // The insertion mark is always within bounds
    let (line, column) = offset_to_line_col(buffer, buffer.insertion()).unwrap_or((1, 1));
    model.ui.status_bar.update_segment(
        SegmentId::CursorPosition,
        SegmentContent::Text(format_cursor_position(line, column)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_segments() {
        let bar = StatusBar::new();
        assert_eq!(bar.text(SegmentId::CursorPosition), "Line: 1, Column: 1");
        assert_eq!(bar.text(SegmentId::Encoding), "UTF-8");
        assert_eq!(bar.text(SegmentId::ModifiedIndicator), "");
    }

    #[test]
    fn test_segment_positions() {
        let bar = StatusBar::new();
        assert_eq!(
            bar.get_segment(SegmentId::FileName).unwrap().position,
            SegmentPosition::Left
        );
        assert_eq!(
            bar.get_segment(SegmentId::Encoding).unwrap().position,
            SegmentPosition::Right
        );
    }

    #[test]
    fn test_render_line_skips_empty_segments() {
        let mut bar = StatusBar::new();
        bar.update_segment(SegmentId::FileName, SegmentContent::Text("a.txt".into()));
        assert_eq!(bar.render_line(), "a.txt | Line: 1, Column: 1  UTF-8");

        bar.update_segment(
            SegmentId::ModifiedIndicator,
            SegmentContent::Text("*".into()),
        );
        assert_eq!(bar.render_line(), "a.txt  * | Line: 1, Column: 1  UTF-8");
    }
}
