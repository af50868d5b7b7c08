//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file
//! - Jump to line/column
//! - Seeding the find panel with a search term

use clap::Parser;
use std::path::PathBuf;

/// A minimal plain-text editor
#[derive(Parser, Debug)]
#[command(name = "librenote", version, about = "A minimal plain-text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Go to line N after opening
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Go to column N (used with --line)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Search term to pre-fill the find panel with
    #[arg(long, value_name = "TEXT")]
    pub find: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// File to open, if any
    pub file: Option<PathBuf>,
    /// Initial cursor position (line, column) - 1-indexed from user, converted to 0-indexed
    pub initial_position: Option<(usize, usize)>,
    /// Initial "last search" term
    pub initial_search: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(path) = &self.path {
            if path.is_dir() {
                return Err(format!("Cannot open directory: {}", path.display()));
            }
        }
        if self.column.is_some() && self.line.is_none() {
            return Err("--column requires --line".to_string());
        }

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let initial_position = self.line.map(|line| {
            let line_0 = line.saturating_sub(1);
            let col_0 = self.column.unwrap_or(1).saturating_sub(1);
            (line_0, col_0)
        });

        Ok(StartupConfig {
            file: self.path,
            initial_position,
            initial_search: self.find.filter(|q| !q.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(path: Option<&str>, line: Option<usize>, column: Option<usize>) -> CliArgs {
        CliArgs {
            path: path.map(PathBuf::from),
            line,
            column,
            find: None,
        }
    }

    #[test]
    fn test_empty_args() {
        let config = args(None, None, None).into_config().unwrap();
        assert_eq!(config.file, None);
        assert_eq!(config.initial_position, None);
    }

    #[test]
    fn test_single_file() {
        let config = args(Some("file.txt"), None, None).into_config().unwrap();
        assert_eq!(config.file, Some(PathBuf::from("file.txt")));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = args(dir.path().to_str(), None, None).into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_line_column_conversion() {
        let config = args(Some("file.txt"), Some(42), Some(10))
            .into_config()
            .unwrap();
        // 1-indexed to 0-indexed: line 42 → 41, column 10 → 9
        assert_eq!(config.initial_position, Some((41, 9)));
    }

    #[test]
    fn test_line_without_column() {
        let config = args(Some("file.txt"), Some(10), None)
            .into_config()
            .unwrap();
        assert_eq!(config.initial_position, Some((9, 0)));
    }

    #[test]
    fn test_column_without_line_rejected() {
        assert!(args(Some("file.txt"), None, Some(3)).into_config().is_err());
    }

    #[test]
    fn test_find_term() {
        let parsed = CliArgs::parse_from(["librenote", "notes.txt", "--find", "alpha"]);
        let config = parsed.into_config().unwrap();
        assert_eq!(config.initial_search.as_deref(), Some("alpha"));

        let empty = CliArgs::parse_from(["librenote", "--find", ""]);
        assert_eq!(empty.into_config().unwrap().initial_search, None);
    }
}
