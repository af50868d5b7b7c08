//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=librenote::model::find=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/librenote/logs/librenote.log` with daily rotation.
//! File logging uses debug level for troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::TextBuffer;

/// Initialize tracing subscriber with console and file logging
///
/// The console layer writes to stderr so it never mixes with the driver's
/// stdout, and respects RUST_LOG (default `warn`).
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "librenote.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of buffer marks for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    pub len: usize,
    pub revision: u64,
    pub insertion: usize,
    pub selection: (usize, usize),
}

impl BufferSnapshot {
    pub fn from_buffer(buffer: &TextBuffer) -> Self {
        let selection = buffer.selection();
        Self {
            len: buffer.len_chars(),
            revision: buffer.revision(),
            insertion: buffer.insertion(),
            selection: (selection.start(), selection.end()),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &BufferSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.revision != other.revision {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.insertion != other.insertion {
            changes.push(format!(
                "insertion: {} → {}",
                self.insertion, other.insertion
            ));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {}..{} → {}..{}",
                self.selection.0, self.selection.1, other.selection.0, other.selection.1
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
