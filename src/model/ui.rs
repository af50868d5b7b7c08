//! UI state - status bar, view options and the find panel

use super::find::SearchEngine;
use super::status_bar::StatusBar;

/// UI state - status messages, word wrap and find session
#[derive(Debug, Clone)]
pub struct UiState {
    /// Message displayed in the status bar
    pub status_message: String,
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Whether long lines wrap in the view
    pub word_wrap: bool,
    /// Find panel state; idle when no session is open
    pub find: SearchEngine,
    /// Set once a quit has been requested
    pub quit_requested: bool,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            status_message: String::new(),
            status_bar: StatusBar::new(),
            word_wrap: true,
            find: SearchEngine::new(),
            quit_requested: false,
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
