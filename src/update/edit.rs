//! Edit message handlers (typing, deletion, selection, clipboard)

use crate::commands::Cmd;
use crate::editable::line_col_to_offset;
use crate::messages::EditMsg;
use crate::model::AppModel;

use super::reject_if_busy;

/// Handle text editing and selection messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::InsertText(text) => {
            if text.is_empty() || reject_if_busy(model, "edit") {
                return Some(Cmd::Redraw);
            }
            model.document.buffer.insert_at_cursor(&text);
            mark_modified(model);
            Some(Cmd::Redraw)
        }

        EditMsg::InsertNewline => {
            if reject_if_busy(model, "edit") {
                return Some(Cmd::Redraw);
            }
            model.document.buffer.insert_at_cursor("\n");
            mark_modified(model);
            Some(Cmd::Redraw)
        }

        EditMsg::DeleteBackward => {
            if reject_if_busy(model, "edit") {
                return Some(Cmd::Redraw);
            }
            if model.document.buffer.delete_backward() {
                mark_modified(model);
            }
            Some(Cmd::Redraw)
        }

        EditMsg::SetCursor(offset) => {
            model.document.buffer.place_cursor(offset);
            Some(Cmd::Redraw)
        }

        EditMsg::SetCursorPosition { line, column } => {
            let offset = line_col_to_offset(&model.document.buffer, line, column);
            model.document.buffer.place_cursor(offset);
            Some(Cmd::Redraw)
        }

        EditMsg::SelectRange { start, end } => {
            model.document.buffer.select_range(start, end);
            Some(Cmd::Redraw)
        }

        EditMsg::SelectAll => {
            model.document.buffer.select_all();
            Some(Cmd::Redraw)
        }

        EditMsg::Copy => {
            let copied = model
                .document
                .buffer
                .copy_selection(model.clipboard.as_mut());
            if copied > 0 {
                model.ui.set_status(format!("Copied {} characters", copied));
            }
            Some(Cmd::Redraw)
        }

        EditMsg::Cut => {
            if reject_if_busy(model, "cut") {
                return Some(Cmd::Redraw);
            }
            let cut = model
                .document
                .buffer
                .cut_selection(model.clipboard.as_mut());
            if cut > 0 {
                mark_modified(model);
                model.ui.set_status(format!("Cut {} characters", cut));
            }
            Some(Cmd::Redraw)
        }

        EditMsg::Paste => {
            if reject_if_busy(model, "paste") {
                return Some(Cmd::Redraw);
            }
            let pasted = model
                .document
                .buffer
                .paste_at_cursor(model.clipboard.as_mut());
            if pasted > 0 {
                mark_modified(model);
            }
            Some(Cmd::Redraw)
        }
    }
}

fn mark_modified(model: &mut AppModel) {
    model.document.is_modified = true;
}
