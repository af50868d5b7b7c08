//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::error::EditorError;

/// Text editing and selection messages (typing, clipboard, cursor movement)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Type text at the insertion point, replacing the selection
    InsertText(String),
    /// Insert a newline at the insertion point
    InsertNewline,
    /// Delete the selection or the character before the insertion point (Backspace)
    DeleteBackward,
    /// Move the insertion point to a character offset (mouse click, arrow keys)
    SetCursor(usize),
    /// Move the insertion point to a 0-indexed line/column (go to line)
    SetCursorPosition { line: usize, column: usize },
    /// Select a range; offsets may be given in either order
    SelectRange { start: usize, end: usize },
    /// Select all text (Ctrl+A)
    SelectAll,
    /// Cut selection to clipboard
    Cut,
    /// Copy selection to clipboard
    Copy,
    /// Paste clipboard at the insertion point
    Paste,
}

/// Find panel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindMsg {
    /// Open the find panel (Ctrl+F), starting a new session
    Open,
    /// Close the find panel, ending the session
    Close,
    /// The query field changed
    SetQuery(String),
    /// Find next (↓ button or Enter)
    FindNext,
    /// Find previous (↑ button)
    FindPrevious,
}

/// Application messages (file operations, view options)
#[derive(Debug)]
pub enum AppMsg {
    /// Open a file, replacing the current document
    OpenFile(PathBuf),
    /// Save to the current file path
    SaveFile,
    /// Save to a new path and adopt it
    SaveFileAs(PathBuf),
    /// Background load finished
    FileLoaded {
        request: u64,
        path: PathBuf,
        result: Result<String, EditorError>,
    },
    /// Background save finished
    SaveCompleted {
        request: u64,
        path: PathBuf,
        result: Result<(), EditorError>,
    },
    /// Abandon the in-flight load or save (dialog dismissed)
    CancelIo,
    /// Toggle word wrap
    ToggleWordWrap,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug)]
pub enum Msg {
    Edit(EditMsg),
    Find(FindMsg),
    App(AppMsg),
}

impl From<EditMsg> for Msg {
    fn from(msg: EditMsg) -> Self {
        Msg::Edit(msg)
    }
}

impl From<FindMsg> for Msg {
    fn from(msg: FindMsg) -> Self {
        Msg::Find(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}
