//! Runtime module - command execution and driver input
//!
//! This module contains the code that runs the editor around `update`:
//! - `app` - owns the model, executes commands, runs file I/O on worker threads
//! - `input` - driver command line to message mapping

pub mod app;
pub mod input;

pub use app::Runtime;
pub use input::{parse_line, DriverInput};
