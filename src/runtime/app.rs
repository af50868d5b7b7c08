use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::file_io;
use crate::messages::{AppMsg, Msg};
use crate::model::{sync_status_bar, AppModel};
use crate::update::update;

/// Owns the model and performs the side effects `update` asks for.
///
/// File loads and saves run on spawned threads; their completions come back
/// through a channel and are applied by [`Runtime::pump`] or
/// [`Runtime::wait_for_io`] on the owning thread.
pub struct Runtime {
    model: AppModel,
    /// Where `Cmd::SaveConfig` writes; None disables persistence
    config_path: Option<PathBuf>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl Runtime {
    /// Runtime that persists configuration to the user config file
    pub fn new(model: AppModel) -> Self {
        Self::with_config_path(model, crate::config_paths::config_file())
    }

    pub fn with_config_path(model: AppModel, config_path: Option<PathBuf>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            config_path,
            msg_tx,
            msg_rx,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    /// Run one message through `update` and execute the resulting command.
    /// Returns false once the application should stop.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
        !self.model.ui.quit_requested
    }

    /// Apply every completion that has already arrived, without blocking.
    /// Returns the number of messages processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            processed += 1;
        }
        processed
    }

    /// Block until the in-flight load or save (if any) has completed or been cancelled
    pub fn wait_for_io(&mut self) {
        while self.model.document.is_busy() {
            match self.msg_rx.recv() {
                Ok(msg) => {
                    self.dispatch(msg);
                }
                Err(_) => break,
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw | Cmd::Quit => {}
            Cmd::LoadFile { request, path } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = file_io::load(&path);
                    let _ = tx.send(Msg::App(AppMsg::FileLoaded {
                        request,
                        path,
                        result,
                    }));
                });
            }
            Cmd::SaveFile {
                request,
                path,
                content,
            } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = file_io::save(&path, &content);
                    let _ = tx.send(Msg::App(AppMsg::SaveCompleted {
                        request,
                        path,
                        result,
                    }));
                });
            }
            Cmd::SaveConfig(config) => {
                let Some(path) = &self.config_path else {
                    tracing::debug!("config persistence disabled, skipping save");
                    return;
                };
                if let Err(e) = config.save_to(path) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to save config");
                    self.model
                        .ui
                        .set_status(format!("Could not save settings: {}", e));
                    sync_status_bar(&mut self.model);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
