//! LibreNote - Elm-style plain-text editor core
//!
//! This crate provides the text buffer, position index, find engine and file
//! persistence of a minimal plain-text editor, wired together with the Elm
//! Architecture pattern (`Msg` → `update` → `Cmd`).

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod file_io;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::EditorError;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
