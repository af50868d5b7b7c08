//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod find;
pub mod status_bar;
pub mod ui;

pub use document::{Document, IoKind, PendingIo};
pub use find::{FindOutcome, FindSession, SearchDirection, SearchEngine};
pub use status_bar::{
    format_cursor_position, sync_status_bar, SegmentContent, SegmentId, SegmentPosition,
    StatusBar, StatusSegment, ENCODING_LABEL,
};
pub use ui::UiState;

use crate::config::EditorConfig;
use crate::editable::{Clipboard, SystemClipboard};

/// The complete application model
pub struct AppModel {
    /// The open document
    pub document: Document,
    /// UI state (status bar, word wrap, find panel)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Clipboard used by cut/copy/paste
    pub clipboard: Box<dyn Clipboard>,
}

impl AppModel {
    /// Create a model with an empty document and the OS clipboard
    pub fn new(config: EditorConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(config: EditorConfig, clipboard: Box<dyn Clipboard>) -> Self {
        let mut ui = UiState::new();
        ui.word_wrap = config.word_wrap;
        let mut model = Self {
            document: Document::new(),
            ui,
            config,
            clipboard,
        };
        sync_status_bar(&mut model);
        model
    }

    /// 1-based (line, column) of the insertion point
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let buffer = &self.document.buffer;
        crate::editable::offset_to_line_col(buffer, buffer.insertion()).unwrap_or((1, 1))
    }
}

impl std::fmt::Debug for AppModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppModel")
            .field("document", &self.document)
            .field("ui", &self.ui)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
