//! Document model - the text buffer and its file state

use std::path::{Path, PathBuf};

use crate::editable::TextBuffer;

/// Kind of file operation in flight for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoKind {
    Load,
    Save,
}

/// An in-flight load or save. While one exists the buffer must not be edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingIo {
    /// Matches the completion message to the request that started it
    pub request: u64,
    pub kind: IoKind,
    pub path: PathBuf,
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The text buffer
    pub buffer: TextBuffer,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Query of the most recently closed find session; seeds the next one
    pub last_search: Option<String>,
    /// Load or save currently running for this document
    pub pending_io: Option<PendingIo>,
    next_request: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// File name for display, "Untitled" for documents without a path
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .map(crate::util::filename_for_display)
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn is_busy(&self) -> bool {
        self.pending_io.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(&self.pending_io, Some(p) if p.kind == IoKind::Load)
    }

    pub fn is_saving(&self) -> bool {
        matches!(&self.pending_io, Some(p) if p.kind == IoKind::Save)
    }

    /// Mark a load/save as in flight and return its request id
    pub fn begin_io(&mut self, kind: IoKind, path: &Path) -> u64 {
        self.next_request = self.next_request.wrapping_add(1);
        let request = self.next_request;
        self.pending_io = Some(PendingIo {
            request,
            kind,
            path: path.to_path_buf(),
        });
        request
    }

    /// Clear the in-flight marker if `request` is the current one.
    /// Returns None for stale or abandoned requests.
    pub fn finish_io(&mut self, request: u64) -> Option<PendingIo> {
        match &self.pending_io {
            Some(pending) if pending.request == request => self.pending_io.take(),
            _ => None,
        }
    }

    /// Abandon the in-flight request; its completion will be discarded
    pub fn cancel_io(&mut self) -> Option<PendingIo> {
        self.pending_io.take()
    }
}
