//! Where librenote keeps its settings and log files
//!
//! The editor persists exactly two things outside the documents it edits:
//! the word-wrap preference in `config.yaml` and the rotated debug logs in
//! `logs/`. Both sit in one per-user directory named after the app.

use std::{env, fs, io, path::PathBuf};

const APP_DIR: &str = "librenote";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_SUBDIR: &str = "logs";

/// Platform base for per-user settings: `%APPDATA%` on Windows,
/// `$XDG_CONFIG_HOME` or `~/.config` elsewhere.
fn user_config_base() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        return env::var_os("APPDATA").map(PathBuf::from);
    }
    env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// librenote's own directory under the user config base
pub fn config_dir() -> Option<PathBuf> {
    user_config_base().map(|base| base.join(APP_DIR))
}

/// Settings file read at startup and rewritten when word wrap is toggled
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_SUBDIR))
}

/// Create the log directory if needed so the file appender can open into it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no user config directory")
    })?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
