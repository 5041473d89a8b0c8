use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use reader_core::{update, AppState, AppViewModel, Msg, DEFAULT_DOWNLOAD_FILENAME};
use reader_engine::{DirectoryFileSaver, EngineHandle, HttpExtractor, Osc52Clipboard};
use reader_logging::{reader_info, reader_warn};
use tokio::sync::oneshot;

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::input::{is_yes, parse_command, Command, HELP};
use crate::install::detect_offer;
use crate::render::{render, render_notice};

const TICK_INTERVAL: Duration = Duration::from_millis(50);

enum Input {
    Line(String),
    Tick,
    Closed,
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    reader_info!(
        "Starting; extraction endpoint {} ({:?})",
        config.extractor.endpoint,
        config.extractor.transport
    );
    let extractor = HttpExtractor::new(config.extractor.to_settings());
    let runner = EffectRunner::new(
        EngineHandle::new(Arc::new(extractor)),
        Box::new(Osc52Clipboard::stdout()),
        Box::new(DirectoryFileSaver::new(config.download_dir.clone())),
    );

    let mut session = Session::new(runner);
    session.install_answer = offer_install(&config, &session.runner);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    spawn_stdin_reader(input_tx.clone());
    // Background tick so engine events are picked up without user input.
    thread::spawn(move || {
        while input_tx.send(Input::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    println!("{HELP}");
    for input in input_rx {
        match input {
            Input::Line(line) => {
                if !session.handle_line(&line)? {
                    break;
                }
            }
            Input::Tick => session.dispatch(Msg::Tick)?,
            Input::Closed => break,
        }
        session.pump_engine()?;
    }
    reader_info!("Exiting");
    Ok(())
}

fn offer_install(config: &AppConfig, runner: &EffectRunner) -> Option<oneshot::Sender<bool>> {
    if !config.offer_install {
        return None;
    }
    let install_dir = config.resolved_install_dir()?;
    let executable = match std::env::current_exe() {
        Ok(path) => path,
        Err(err) => {
            reader_warn!("Cannot locate current executable: {}", err);
            return None;
        }
    };
    let (prompt, answer) = detect_offer(&executable, &install_dir)?;
    reader_info!("Offering install to {:?}", prompt.target());
    runner.offer_install(Box::new(prompt));
    Some(answer)
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    reader_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(Input::Closed);
    });
}

struct Session {
    state: AppState,
    last_view: AppViewModel,
    runner: EffectRunner,
    install_answer: Option<oneshot::Sender<bool>>,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let last_view = state.view();
        Self {
            state,
            last_view,
            runner,
            install_answer: None,
        }
    }

    /// Returns false when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        if self.state.install().is_prompting() {
            if let Some(answer) = self.install_answer.take() {
                let _ = answer.send(is_yes(line));
                return Ok(true);
            }
        }

        match parse_command(line) {
            Command::Submit(url) => {
                self.dispatch(Msg::InputChanged(url))?;
                self.dispatch(Msg::UrlSubmitted)?;
            }
            Command::Copy => self.dispatch(Msg::CopyClicked)?,
            Command::Save => self.dispatch(Msg::DownloadClicked {
                filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
            })?,
            Command::Install => self.dispatch(Msg::InstallClicked)?,
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(false),
            Command::Unknown(name) => println!("Unknown command :{name} (try :help)"),
        }
        Ok(true)
    }

    fn pump_engine(&mut self) -> io::Result<()> {
        for msg in self.runner.drain_events() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        self.state = state;

        let notices = self.runner.run(effects);

        let mut out = io::stdout().lock();
        if changed {
            let view = self.state.view();
            render(&self.last_view, &view, &mut out)?;
            self.last_view = view;
        }
        for notice in &notices {
            render_notice(notice, &mut out)?;
        }
        out.flush()
    }
}
