//! Find session tests - forward/backward search and two-step wraparound

mod common;

use common::{selection_of, test_model, test_model_at};
use librenote::messages::{EditMsg, FindMsg, Msg};
use librenote::model::AppModel;
use librenote::update::update;

fn open_with(model: &mut AppModel, query: &str) {
    update(model, Msg::Find(FindMsg::Open));
    update(model, Msg::Find(FindMsg::SetQuery(query.to_string())));
}

fn next(model: &mut AppModel) {
    update(model, Msg::Find(FindMsg::FindNext));
}

fn prev(model: &mut AppModel) {
    update(model, Msg::Find(FindMsg::FindPrevious));
}

#[test]
fn test_forward_cycle_with_wrap_step() {
    let mut model = test_model("alpha beta alpha");
    open_with(&mut model, "alpha");

    next(&mut model);
    assert_eq!(selection_of(&model), (0, 5));
    next(&mut model);
    assert_eq!(selection_of(&model), (11, 16));

    // No match: the wrap step leaves the selection alone
    next(&mut model);
    assert_eq!(selection_of(&model), (11, 16));

    next(&mut model);
    assert_eq!(selection_of(&model), (0, 5));
}

#[test]
fn test_backward_on_fresh_session_wraps_first() {
    let mut model = test_model("alpha beta alpha");
    open_with(&mut model, "alpha");

    prev(&mut model);
    assert_eq!(selection_of(&model), (0, 0));

    prev(&mut model);
    assert_eq!(selection_of(&model), (11, 16));
    prev(&mut model);
    assert_eq!(selection_of(&model), (0, 5));
}

#[test]
fn test_session_ignores_cursor_placement() {
    let mut model = test_model_at("aaa", 2);
    open_with(&mut model, "a");

    next(&mut model);
    assert_eq!(selection_of(&model), (0, 1));
}

#[test]
fn test_direction_switch_continues_from_resume_point() {
    let mut model = test_model("xx xx xx");
    open_with(&mut model, "xx");

    next(&mut model);
    next(&mut model);
    assert_eq!(selection_of(&model), (3, 5));

    // Resume point is the end of the last forward match
    prev(&mut model);
    assert_eq!(selection_of(&model), (3, 5));
    prev(&mut model);
    assert_eq!(selection_of(&model), (0, 2));
}

#[test]
fn test_new_query_keeps_resume_point() {
    let mut model = test_model("ab cd ab cd");
    open_with(&mut model, "cd");
    next(&mut model);
    assert_eq!(selection_of(&model), (3, 5));

    update(&mut model, Msg::Find(FindMsg::SetQuery("ab".to_string())));
    next(&mut model);
    assert_eq!(selection_of(&model), (6, 8));
}

#[test]
fn test_reopen_starts_fresh_with_last_query() {
    let mut model = test_model("one one");
    open_with(&mut model, "one");
    next(&mut model);
    next(&mut model);
    update(&mut model, Msg::Find(FindMsg::Close));
    assert_eq!(model.document.last_search.as_deref(), Some("one"));

    update(&mut model, Msg::Find(FindMsg::Open));
    next(&mut model);
    assert_eq!(selection_of(&model), (0, 3));
}

#[test]
fn test_resume_point_clamped_after_shrink() {
    let mut model = test_model("abc abc abc");
    open_with(&mut model, "abc");
    next(&mut model);
    next(&mut model);
    next(&mut model);
    assert_eq!(selection_of(&model), (8, 11));

    update(&mut model, Msg::Edit(EditMsg::SelectAll));
    update(&mut model, Msg::Edit(EditMsg::InsertText("abc".to_string())));
    assert_eq!(model.document.buffer.text(), "abc");

    prev(&mut model);
    assert_eq!(selection_of(&model), (0, 3));
}

#[test]
fn test_match_across_line_break() {
    let mut model = test_model("end\nstart");
    open_with(&mut model, "d\ns");
    next(&mut model);
    assert_eq!(selection_of(&model), (2, 5));
}

#[test]
fn test_no_occurrence_only_wraps() {
    let mut model = test_model_at("hello", 2);
    open_with(&mut model, "zzz");
    next(&mut model);
    next(&mut model);
    assert_eq!(selection_of(&model), (2, 2));
    assert!(model.ui.status_message.starts_with("No more matches"));
}
