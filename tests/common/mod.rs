//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use librenote::config::EditorConfig;
use librenote::editable::MemoryClipboard;
use librenote::model::AppModel;
use librenote::Runtime;

/// Create a test model with given text, cursor at 0 and an in-memory clipboard
pub fn test_model(text: &str) -> AppModel {
    let mut model =
        AppModel::with_clipboard(EditorConfig::default(), Box::new(MemoryClipboard::new()));
    model.document.buffer.set_text(text);
    model
}

/// Create a test model with the cursor placed at `offset`
pub fn test_model_at(text: &str, offset: usize) -> AppModel {
    let mut model = test_model(text);
    model.document.buffer.place_cursor(offset);
    model
}

/// Create a test model with a selection (insertion point at `start`)
pub fn test_model_with_selection(text: &str, start: usize, end: usize) -> AppModel {
    let mut model = test_model(text);
    model.document.buffer.select_range(start, end);
    model
}

/// Runtime that never touches the user config directory
pub fn test_runtime(text: &str) -> Runtime {
    Runtime::with_config_path(test_model(text), None)
}

/// Get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.buffer.text()
}

/// (start, end) of the current selection
pub fn selection_of(model: &AppModel) -> (usize, usize) {
    let selection = model.document.buffer.selection();
    (selection.start(), selection.end())
}
