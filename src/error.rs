//! Error type shared by the buffer, position index and file I/O

use std::path::{Path, PathBuf};

/// Errors reported by the editor core
///
/// `Range` and `OutOfRange` are contract violations by the caller; the buffer
/// is left untouched when they are returned. `Io` wraps the underlying cause of
/// a failed load or save.
#[derive(Debug)]
pub enum EditorError {
    /// A strict range argument fell outside `[0, len]` or had `start > end`
    Range { start: usize, end: usize, len: usize },
    /// A position query beyond the end of the document
    OutOfRange { offset: usize, len: usize },
    /// File read or write failure
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EditorError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Get a user-friendly message for the status bar
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, source } => {
                let name = crate::util::filename_for_display(path);
                match source.kind() {
                    std::io::ErrorKind::NotFound => format!("File not found: {}", name),
                    std::io::ErrorKind::PermissionDenied => {
                        format!("Permission denied: {}", name)
                    }
                    _ => format!("Error accessing {}: {}", name, source),
                }
            }
            other => other.to_string(),
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range { start, end, len } => {
                write!(f, "range {}..{} outside buffer of length {}", start, end, len)
            }
            Self::OutOfRange { offset, len } => {
                write!(f, "offset {} beyond buffer of length {}", offset, len)
            }
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
