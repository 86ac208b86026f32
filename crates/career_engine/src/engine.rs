use std::sync::{mpsc, Arc};
use std::thread;

use career_logging::career_error;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::loader::DirectoryLoader;
use crate::{EngineEvent, Source};

enum EngineCommand {
    Load { sources: Vec<Source> },
}

/// Runs directory loads on a background thread that owns a tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(ReqwestFetcher::new(settings))
    }

    pub fn with_fetcher<F: Fetcher + 'static>(fetcher: F) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let loader = Arc::new(DirectoryLoader::new(fetcher));

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    career_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                runtime.block_on(handle_command(loader.as_ref(), command, &event_tx));
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a load; candidates are tried in order, one at a time.
    pub fn load(&self, sources: Vec<Source>) {
        let _ = self.cmd_tx.send(EngineCommand::Load { sources });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command<F: Fetcher>(
    loader: &DirectoryLoader<F>,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Load { sources } => {
            let event = match loader.load(&sources).await {
                Ok(loaded) => EngineEvent::DirectoryLoaded(loaded),
                Err(err) => EngineEvent::LoadFailed(err),
            };
            let _ = event_tx.send(event);
        }
    }
}
