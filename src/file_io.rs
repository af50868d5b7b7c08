//! Document persistence: whole-file load and atomic save
//!
//! This is the only module that reads or writes documents on disk. It never
//! touches a buffer; callers apply the loaded text with `TextBuffer::set_text`.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::EditorError;
use crate::util::{decode_text, validate_file_for_opening};

/// Read a whole file as UTF-8 text
pub fn load(path: &Path) -> Result<String, EditorError> {
    let size = validate_file_for_opening(path).map_err(|e| EditorError::io(path, e))?;
    let bytes = fs::read(path).map_err(|e| EditorError::io(path, e))?;
    let text = decode_text(bytes).map_err(|e| EditorError::io(path, e))?;
    tracing::info!("Loaded {} ({} bytes)", path.display(), size);
    Ok(text)
}

/// Write `content` to `path`, replacing the file atomically
///
/// The text goes to a temporary file in the same directory, which is synced
/// and then renamed over the target. On failure the previous file is left
/// as it was. Permissions of an existing target are carried over.
pub fn save(path: &Path, content: &str) -> Result<(), EditorError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| EditorError::io(path, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| EditorError::io(path, e))?;
    temp.flush().map_err(|e| EditorError::io(path, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| EditorError::io(path, e))?;
    }

    // Data must be on disk before the rename makes it visible
    temp.as_file()
        .sync_all()
        .map_err(|e| EditorError::io(path, e))?;
    temp.persist(path).map_err(|e| EditorError::io(path, e.error))?;

    tracing::info!("Saved {} ({} bytes)", path.display(), content.len());
    Ok(())
}
