//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod edit;
mod find;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::sync_status_bar;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::messages::AppMsg;
#[cfg(debug_assertions)]
use crate::tracing::BufferSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use edit::update_edit;
pub use find::update_find;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Find(m) => find::update_find(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_status_bar(model);
    result
}

/// Refuse a buffer-changing operation while a load or save is in flight.
/// Returns true (and reports it) when the operation must be dropped.
pub(crate) fn reject_if_busy(model: &mut AppModel, action: &str) -> bool {
    let Some(pending) = &model.document.pending_io else {
        return false;
    };
    let busy = match pending.kind {
        crate::model::IoKind::Load => "loading",
        crate::model::IoKind::Save => "saving",
    };
    tracing::warn!(
        action,
        request = pending.request,
        path = %pending.path.display(),
        "rejected while {}",
        busy
    );
    model
        .ui
        .set_status(format!("Cannot {} while {} - use :cancel", action, busy));
    true
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after buffer marks and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = BufferSnapshot::from_buffer(&model.document.buffer);

    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = BufferSnapshot::from_buffer(&model.document.buffer);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "buffer", %diff, "state changed");
    }

    model
        .document
        .buffer
        .assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// File contents carried by completions are left out.
/// Example outputs:
/// - `Edit::SetCursor(4)`
/// - `Find::FindNext`
/// - `App::FileLoaded(3, "notes.txt", ok)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Find(m) => format!("Find::{:?}", m),
        Msg::App(AppMsg::FileLoaded {
            request,
            path,
            result,
        }) => format!(
            "App::FileLoaded({}, {:?}, {})",
            request,
            path,
            if result.is_ok() { "ok" } else { "err" }
        ),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
