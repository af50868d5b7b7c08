//! File validation for opening documents
//!
//! Checks a path before its content is read:
//! - File existence and permissions
//! - Not a directory
//! - File size limit
//!
//! and the content after it is read:
//! - Binary data (NUL bytes)
//! - UTF-8 encoding

use std::fs;
use std::io::{Error, ErrorKind};
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// How many leading bytes are scanned for NUL when detecting binary content
const BINARY_SNIFF_LEN: usize = 8192;

/// Validate a file before attempting to open it
///
/// Returns the file size on success. Failures are plain `std::io::Error`s
/// with the kind that best describes them (`NotFound`, `PermissionDenied`,
/// `InvalidInput` for directories and oversized files).
pub fn validate_file_for_opening(path: &Path) -> Result<u64, Error> {
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(Error::new(ErrorKind::InvalidInput, "is a directory"));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "file too large ({:.1} MB, max {} MB)",
                metadata.len() as f64 / (1024.0 * 1024.0),
                MAX_FILE_SIZE / (1024 * 1024)
            ),
        ));
    }

    Ok(metadata.len())
}

/// Check if content is likely binary by scanning the first 8KB for null bytes
pub fn is_likely_binary(bytes: &[u8]) -> bool {
    let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    sniff.contains(&0)
}

/// Decode file bytes as text, rejecting binary data and invalid UTF-8
pub fn decode_text(bytes: Vec<u8>) -> Result<String, Error> {
    if is_likely_binary(&bytes) {
        return Err(Error::new(ErrorKind::InvalidData, "binary file"));
    }
    String::from_utf8(bytes).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("not valid UTF-8 (at byte {})", e.utf8_error().valid_up_to()),
        )
    })
}

/// Get the filename from a path for display in messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
