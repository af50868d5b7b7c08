//! LibreNote - a minimal plain-text editor
//!
//! Line-oriented driver: each stdin line is a command or typed text, and the
//! status bar is printed after every line.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use librenote::cli::{CliArgs, StartupConfig};
use librenote::messages::{AppMsg, EditMsg, Msg};
use librenote::model::sync_status_bar;
use librenote::runtime::{parse_line, DriverInput};
use librenote::{AppModel, EditorConfig, Runtime};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    librenote::tracing::init();

    let config = EditorConfig::load();
    let mut runtime = Runtime::new(AppModel::new(config));
    apply_startup(&mut runtime, startup);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", runtime.model().ui.status_bar.render_line())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut running = true;
        match parse_line(&line) {
            Ok(DriverInput::Print) => {
                writeln!(stdout, "{}", runtime.model().document.buffer.text())?;
            }
            Ok(DriverInput::Messages(msgs)) => {
                for msg in msgs {
                    running = runtime.dispatch(msg);
                    if !running {
                        break;
                    }
                }
            }
            Err(e) => {
                tracing::debug!(%line, error = %e, "unparsed driver line");
                writeln!(stdout, "{}", e)?;
            }
        }
        if !running {
            break;
        }

        runtime.wait_for_io();
        runtime.pump();
        writeln!(stdout, "{}", runtime.model().ui.status_bar.render_line())?;
    }

    Ok(())
}

fn apply_startup(runtime: &mut Runtime, startup: StartupConfig) {
    if let Some(path) = startup.file {
        if path.exists() {
            runtime.dispatch(Msg::App(AppMsg::OpenFile(path)));
            runtime.wait_for_io();
        } else {
            tracing::info!(path = %path.display(), "starting new file");
            let model = runtime.model_mut();
            model.document.file_path = Some(path);
            model.ui.set_status("New file");
            sync_status_bar(model);
        }
    }

    if let Some((line, column)) = startup.initial_position {
        runtime.dispatch(Msg::Edit(EditMsg::SetCursorPosition { line, column }));
    }

    if let Some(query) = startup.initial_search {
        runtime.model_mut().document.last_search = Some(query);
    }
}
