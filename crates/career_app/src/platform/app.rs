use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use career_core::{update, AppState, Msg};
use career_engine::{EngineEvent, EngineHandle};
use career_logging::{career_error, career_info};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::persistence::open_visited_store;
use super::ui::keys::{map_key, KeyAction};
use super::ui::render::render;
use crate::settings::RunConfig;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn run_interactive(config: RunConfig) -> Result<()> {
    let effects = EffectRunner::new(open_visited_store(&config.state_dir));
    let engine = EngineHandle::new(config.fetch.clone());
    career_info!("Loading directory from {} candidate sources", config.sources.len());
    engine.load(config.sources.clone());

    let mut app = App::new(
        AppState::with_query(config.query.clone()),
        effects,
        engine,
        config.log_path().display().to_string(),
    );
    let restored = app.effects.restore();
    app.dispatch(Msg::VisitedRestored(restored));

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

struct App {
    state: AppState,
    effects: EffectRunner,
    engine: EngineHandle,
    log_path: String,
    needs_redraw: bool,
}

impl App {
    fn new(state: AppState, effects: EffectRunner, engine: EngineHandle, log_path: String) -> Self {
        Self {
            state,
            effects,
            engine,
            log_path,
            needs_redraw: true,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel();
        let input_running = Arc::new(AtomicBool::new(true));
        let input_flag = Arc::clone(&input_running);

        let input_thread = thread::spawn(move || -> Result<()> {
            while input_flag.load(Ordering::Relaxed) {
                if event::poll(INPUT_POLL)? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending = VecDeque::new();
        let result: Result<()> = 'event_loop: loop {
            self.pump_engine_events();

            loop {
                match event_rx.try_recv() {
                    Ok(event) => pending.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            let mut quit = false;
            while let Some(event) = pending.pop_front() {
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match map_key(key, &self.state.view()) {
                            Some(KeyAction::Quit) => {
                                quit = true;
                                break;
                            }
                            Some(KeyAction::Dispatch(msg)) => self.dispatch(msg),
                            None => {}
                        }
                    }
                    Event::Resize(_, _) => self.needs_redraw = true,
                    _ => {}
                }
            }
            if quit {
                break Ok(());
            }

            if std::mem::take(&mut self.needs_redraw) {
                let view = self.state.view();
                if let Err(err) = terminal.draw(|frame| render(frame, &view, &self.log_path)) {
                    break Err(err.into());
                }
            }

            thread::sleep(FRAME_INTERVAL);
        };

        input_running.store(false, Ordering::Relaxed);
        match input_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }

    fn pump_engine_events(&mut self) {
        while let Some(event) = self.engine.try_recv() {
            let msg = match event {
                EngineEvent::DirectoryLoaded(loaded) => Msg::DirectoryLoaded(loaded.companies),
                EngineEvent::LoadFailed(err) => {
                    career_error!("Directory load failed: {}", err);
                    Msg::DirectoryFailed(err.to_string())
                }
            };
            self.dispatch(msg);
        }
    }

    /// Applies `msg`, runs its effects and schedules a redraw when state changed.
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.run(effects);
        if state.consume_dirty() {
            self.needs_redraw = true;
        }
        self.state = state;
    }
}
