//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::config::EditorConfig;

/// Side effects requested by `update`, executed by the runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Redraw the view (status bar, text)
    Redraw,
    /// Read a file in the background; completes with `AppMsg::FileLoaded`
    LoadFile { request: u64, path: PathBuf },
    /// Write a file in the background; completes with `AppMsg::SaveCompleted`
    SaveFile {
        request: u64,
        path: PathBuf,
        content: String,
    },
    /// Persist the editor configuration
    SaveConfig(EditorConfig),
    /// Stop the application
    Quit,
    /// Several commands at once
    Batch(Vec<Cmd>),
}
