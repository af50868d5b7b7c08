//! Driver input handling
//!
//! Maps one line of driver input to messages. Lines starting with `:` are
//! commands; anything else is typed text followed by a newline. A leading
//! `::` types a literal `:`.

use std::path::PathBuf;

use crate::messages::{AppMsg, EditMsg, FindMsg, Msg};

/// What a driver line asks for
#[derive(Debug)]
pub enum DriverInput {
    /// Messages to dispatch in order
    Messages(Vec<Msg>),
    /// Print the document text
    Print,
}

/// Parse one line of driver input
pub fn parse_line(line: &str) -> Result<DriverInput, String> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(typed(line));
    };
    if command.starts_with(':') {
        return Ok(typed(command));
    }

    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim_end(), ""),
    };

    let msgs: Vec<Msg> = match name {
        "open" => vec![AppMsg::OpenFile(require_path(name, arg)?).into()],
        "save" => vec![AppMsg::SaveFile.into()],
        "saveas" => vec![AppMsg::SaveFileAs(require_path(name, arg)?).into()],
        "find" => {
            let mut msgs = vec![FindMsg::Open.into()];
            if !arg.is_empty() {
                msgs.push(FindMsg::SetQuery(arg.to_string()).into());
            }
            msgs
        }
        "query" => vec![FindMsg::SetQuery(arg.to_string()).into()],
        "next" => vec![FindMsg::FindNext.into()],
        "prev" => vec![FindMsg::FindPrevious.into()],
        "close" => vec![FindMsg::Close.into()],
        "select" => {
            let mut parts = arg.split_whitespace();
            let start = parse_offset(name, parts.next())?;
            let end = parse_offset(name, parts.next())?;
            vec![EditMsg::SelectRange { start, end }.into()]
        }
        "goto" => {
            let line = parse_offset(name, Some(arg))?;
            vec![EditMsg::SetCursorPosition {
                line: line.saturating_sub(1),
                column: 0,
            }
            .into()]
        }
        "all" => vec![EditMsg::SelectAll.into()],
        "cut" => vec![EditMsg::Cut.into()],
        "copy" => vec![EditMsg::Copy.into()],
        "paste" => vec![EditMsg::Paste.into()],
        "backspace" => vec![EditMsg::DeleteBackward.into()],
        "wrap" => vec![AppMsg::ToggleWordWrap.into()],
        "cancel" => vec![AppMsg::CancelIo.into()],
        "quit" => vec![AppMsg::Quit.into()],
        "print" => return Ok(DriverInput::Print),
        _ => return Err(format!("Unknown command: :{}", name)),
    };
    Ok(DriverInput::Messages(msgs))
}

fn typed(text: &str) -> DriverInput {
    let mut msgs = Vec::with_capacity(2);
    if !text.is_empty() {
        msgs.push(EditMsg::InsertText(text.to_string()).into());
    }
    msgs.push(EditMsg::InsertNewline.into());
    DriverInput::Messages(msgs)
}

fn require_path(command: &str, arg: &str) -> Result<PathBuf, String> {
    if arg.is_empty() {
        return Err(format!(":{} requires a path", command));
    }
    Ok(PathBuf::from(arg))
}

fn parse_offset(command: &str, arg: Option<&str>) -> Result<usize, String> {
    let arg = arg.unwrap_or_default();
    arg.parse()
        .map_err(|_| format!(":{} expects a number, got {:?}", command, arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(line: &str) -> Vec<Msg> {
        match parse_line(line) {
            Ok(DriverInput::Messages(msgs)) => msgs,
            other => panic!("expected messages for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_plain_line_is_typed_with_newline() {
        let msgs = messages("hello");
        assert!(matches!(&msgs[0], Msg::Edit(EditMsg::InsertText(t)) if t == "hello"));
        assert!(matches!(&msgs[1], Msg::Edit(EditMsg::InsertNewline)));

        let msgs = messages("");
        assert_eq!(msgs.len(), 1);
    }

    #[test]
    fn test_double_colon_escapes() {
        let msgs = messages("::quit");
        assert!(matches!(&msgs[0], Msg::Edit(EditMsg::InsertText(t)) if t == ":quit"));
    }

    #[test]
    fn test_find_with_query_opens_and_sets() {
        let msgs = messages(":find alpha beta");
        assert!(matches!(&msgs[0], Msg::Find(FindMsg::Open)));
        assert!(matches!(&msgs[1], Msg::Find(FindMsg::SetQuery(q)) if q == "alpha beta"));

        assert_eq!(messages(":find").len(), 1);
    }

    #[test]
    fn test_select_and_goto() {
        let msgs = messages(":select 7 2");
        assert!(matches!(
            &msgs[0],
            Msg::Edit(EditMsg::SelectRange { start: 7, end: 2 })
        ));

        let msgs = messages(":goto 3");
        assert!(matches!(
            &msgs[0],
            Msg::Edit(EditMsg::SetCursorPosition { line: 2, column: 0 })
        ));
    }

    #[test]
    fn test_file_commands() {
        let msgs = messages(":open notes.txt");
        assert!(matches!(&msgs[0], Msg::App(AppMsg::OpenFile(p)) if p == &PathBuf::from("notes.txt")));
        assert!(matches!(
            &messages(":save")[0],
            Msg::App(AppMsg::SaveFile)
        ));
        assert!(parse_line(":saveas").is_err());
    }

    #[test]
    fn test_print_and_errors() {
        assert!(matches!(parse_line(":print"), Ok(DriverInput::Print)));
        assert_eq!(
            parse_line(":frobnicate").unwrap_err(),
            "Unknown command: :frobnicate"
        );
        assert!(parse_line(":select 1").is_err());
        assert!(parse_line(":goto x").is_err());
    }
}
