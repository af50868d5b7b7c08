//! Find panel message handlers

use crate::commands::Cmd;
use crate::messages::FindMsg;
use crate::model::{AppModel, FindOutcome, SearchDirection};

use super::reject_if_busy;

/// Handle find panel messages
pub fn update_find(model: &mut AppModel, msg: FindMsg) -> Option<Cmd> {
    match msg {
        FindMsg::Open => {
            let last = model.document.last_search.clone();
            model.ui.find.open(last.as_deref());
            tracing::debug!(query = ?last, "find panel opened");
            Some(Cmd::Redraw)
        }

        FindMsg::Close => {
            if let Some(query) = model.ui.find.close() {
                tracing::debug!(%query, "find panel closed");
                model.document.last_search = Some(query);
            }
            Some(Cmd::Redraw)
        }

        FindMsg::SetQuery(query) => {
            if !model.ui.find.set_query(query) {
                model.ui.set_status("Find panel is not open");
            }
            Some(Cmd::Redraw)
        }

        FindMsg::FindNext => run_find(model, SearchDirection::Forward),
        FindMsg::FindPrevious => run_find(model, SearchDirection::Backward),
    }
}

fn run_find(model: &mut AppModel, direction: SearchDirection) -> Option<Cmd> {
    if reject_if_busy(model, "search") {
        return Some(Cmd::Redraw);
    }

    let outcome = model.ui.find.find(&mut model.document.buffer, direction);
    match outcome {
        FindOutcome::Inactive => model.ui.set_status("Find panel is not open"),
        FindOutcome::EmptyQuery => model.ui.set_status("Enter a search term"),
        FindOutcome::Found { .. } => {
            let (line, column) = model.cursor_line_col();
            model
                .ui
                .set_status(format!("Found at Line: {}, Column: {}", line, column));
        }
        FindOutcome::Wrapped => {
            let message = match direction {
                SearchDirection::Forward => "No more matches - continuing from the start",
                SearchDirection::Backward => "No more matches - continuing from the end",
            };
            model.ui.set_status(message);
        }
    }
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::editable::{MemoryClipboard, Selection};

    fn model(text: &str) -> AppModel {
        let mut model =
            AppModel::with_clipboard(EditorConfig::default(), Box::new(MemoryClipboard::new()));
        model.document.buffer.set_text(text);
        model
    }

    #[test]
    fn test_close_stores_last_search_and_reopen_prefills() {
        let mut model = model("one two one");
        update_find(&mut model, FindMsg::Open);
        update_find(&mut model, FindMsg::SetQuery("one".to_string()));
        update_find(&mut model, FindMsg::FindNext);
        update_find(&mut model, FindMsg::Close);
        assert_eq!(model.document.last_search.as_deref(), Some("one"));
        assert!(!model.ui.find.is_active());

        update_find(&mut model, FindMsg::Open);
        let session = model.ui.find.session().unwrap();
        assert_eq!(session.query(), "one");
        assert_eq!(session.resume_offset(), None);
    }

    #[test]
    fn test_find_reports_position_and_wrap() {
        let mut model = model("ab\nab");
        update_find(&mut model, FindMsg::Open);
        update_find(&mut model, FindMsg::SetQuery("ab".to_string()));

        update_find(&mut model, FindMsg::FindNext);
        assert_eq!(model.ui.status_message, "Found at Line: 1, Column: 1");
        update_find(&mut model, FindMsg::FindNext);
        assert_eq!(model.ui.status_message, "Found at Line: 2, Column: 1");
        assert_eq!(model.document.buffer.selection(), Selection::new(3, 5));

        update_find(&mut model, FindMsg::FindNext);
        assert_eq!(
            model.ui.status_message,
            "No more matches - continuing from the start"
        );
        assert_eq!(model.document.buffer.selection(), Selection::new(3, 5));
    }

    #[test]
    fn test_find_without_session_is_inactive() {
        let mut model = model("abc");
        update_find(&mut model, FindMsg::FindNext);
        assert_eq!(model.ui.status_message, "Find panel is not open");
        assert!(model.document.buffer.selection().is_empty());
    }

    #[test]
    fn test_empty_query_reports_status() {
        let mut model = model("abc");
        update_find(&mut model, FindMsg::Open);
        update_find(&mut model, FindMsg::FindPrevious);
        assert_eq!(model.ui.status_message, "Enter a search term");
    }
}
