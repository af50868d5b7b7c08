//! App message handlers (file operations, view options)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, IoKind};
use crate::util::filename_for_display;

use super::reject_if_busy;

/// Handle app messages (file operations, view options)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::OpenFile(path) => {
            if reject_if_busy(model, "open") {
                return Some(Cmd::Redraw);
            }
            let request = model.document.begin_io(IoKind::Load, &path);
            model.ui.set_status("Loading...");
            tracing::debug!(request, path = %path.display(), "load requested");
            Some(Cmd::LoadFile { request, path })
        }

        AppMsg::SaveFile => {
            let file_path = model.document.file_path.clone();
            match file_path {
                Some(path) => start_save(model, path),
                None => {
                    model.ui.set_status("No file path - use :saveas PATH");
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::SaveFileAs(path) => start_save(model, path),

        AppMsg::FileLoaded {
            request,
            path,
            result,
        } => {
            if model.document.finish_io(request).is_none() {
                tracing::debug!(request, path = %path.display(), "discarding stale load result");
                return None;
            }
            match result {
                Ok(content) => {
                    model.document.buffer.set_text(&content);
                    model.document.file_path = Some(path.clone());
                    model.document.is_modified = false;
                    model
                        .ui
                        .set_status(format!("Loaded: {}", filename_for_display(&path)));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "load failed");
                    model.ui.set_status(format!("Error: {}", e.user_message()));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SaveCompleted {
            request,
            path,
            result,
        } => {
            if model.document.finish_io(request).is_none() {
                match &result {
                    Ok(()) => {
                        tracing::debug!(request, path = %path.display(), "discarding stale save result")
                    }
                    Err(e) => {
                        tracing::warn!(request, path = %path.display(), error = %e, "cancelled save failed")
                    }
                }
                return None;
            }
            match result {
                Ok(()) => {
                    model
                        .ui
                        .set_status(format!("Saved: {}", filename_for_display(&path)));
                    model.document.file_path = Some(path);
                    model.document.is_modified = false;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "save failed");
                    model.ui.set_status(format!("Error: {}", e.user_message()));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::CancelIo => {
            match model.document.cancel_io() {
                Some(pending) => {
                    let what = match pending.kind {
                        IoKind::Load => "loading",
                        IoKind::Save => "saving",
                    };
                    tracing::info!(request = pending.request, path = %pending.path.display(), "cancelled {}", what);
                    model.ui.set_status(format!(
                        "Cancelled {} {}",
                        what,
                        filename_for_display(&pending.path)
                    ));
                }
                None => model.ui.set_status("Nothing to cancel"),
            }
            Some(Cmd::Redraw)
        }

        AppMsg::ToggleWordWrap => {
            model.ui.word_wrap = !model.ui.word_wrap;
            model.config.word_wrap = model.ui.word_wrap;
            let state = if model.ui.word_wrap { "on" } else { "off" };
            model.ui.set_status(format!("Word wrap: {}", state));
            Some(Cmd::Batch(vec![
                Cmd::SaveConfig(model.config.clone()),
                Cmd::Redraw,
            ]))
        }

        AppMsg::Quit => {
            model.ui.quit_requested = true;
            Some(Cmd::Quit)
        }
    }
}

fn start_save(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    if reject_if_busy(model, "save") {
        return Some(Cmd::Redraw);
    }
    let request = model.document.begin_io(IoKind::Save, &path);
    let content = model.document.buffer.text();
    model.ui.set_status("Saving...");
    tracing::debug!(request, path = %path.display(), "save requested");
    Some(Cmd::SaveFile {
        request,
        path,
        content,
    })
}
