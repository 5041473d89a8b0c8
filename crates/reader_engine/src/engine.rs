use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use reader_logging::{reader_debug, reader_error, reader_info, reader_warn};

use crate::{
    CopyResetTimer, DeferredInstallPrompt, EngineEvent, Extractor, InstallSignalRegistry,
    RequestId, SignalId,
};

/// Receives engine events from background tasks.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Extract {
        request_id: RequestId,
        url: String,
    },
    ScheduleCopyReset {
        generation: u64,
        after: Duration,
    },
    OfferInstall {
        prompt: Box<dyn DeferredInstallPrompt>,
    },
    PromptInstall {
        signal: SignalId,
    },
    DiscardInstall {
        signal: SignalId,
    },
}

/// Runs asynchronous work on a background tokio runtime and reports back as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    reader_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            let _guard = runtime.enter();
            let sink: Arc<dyn EventSink> = Arc::new(ChannelEventSink::new(event_tx));
            let mut worker = Worker {
                extractor,
                sink,
                copy_timer: CopyResetTimer::new(),
                install: InstallSignalRegistry::new(),
            };
            while let Ok(command) = cmd_rx.recv() {
                worker.handle(command);
            }
            reader_debug!("Engine command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    pub fn extract(&self, request_id: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::Extract {
            request_id,
            url: url.into(),
        });
    }

    pub fn schedule_copy_reset(&self, generation: u64, after: Duration) {
        self.send(EngineCommand::ScheduleCopyReset { generation, after });
    }

    /// Hands an environment install offer to the engine. An
    /// [`EngineEvent::InstallAvailable`] follows once it is captured.
    pub fn offer_install(&self, prompt: Box<dyn DeferredInstallPrompt>) {
        self.send(EngineCommand::OfferInstall { prompt });
    }

    pub fn prompt_install(&self, signal: SignalId) {
        self.send(EngineCommand::PromptInstall { signal });
    }

    pub fn discard_install(&self, signal: SignalId) {
        self.send(EngineCommand::DiscardInstall { signal });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            reader_warn!("Engine is not running; command dropped");
        }
    }
}

struct Worker {
    extractor: Arc<dyn Extractor>,
    sink: Arc<dyn EventSink>,
    copy_timer: CopyResetTimer,
    install: InstallSignalRegistry,
}

impl Worker {
    fn handle(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Extract { request_id, url } => {
                let extractor = self.extractor.clone();
                let sink = self.sink.clone();
                tokio::spawn(async move {
                    let result = extractor.extract(&url).await;
                    match &result {
                        Ok(text) => reader_info!(
                            "Extraction {} succeeded: {} bytes",
                            request_id,
                            text.len()
                        ),
                        Err(err) => reader_warn!("Extraction {} failed: {}", request_id, err),
                    }
                    sink.emit(EngineEvent::ExtractionFinished { request_id, result });
                });
            }
            EngineCommand::ScheduleCopyReset { generation, after } => {
                self.copy_timer
                    .schedule(generation, after, self.sink.clone());
            }
            EngineCommand::OfferInstall { prompt } => {
                let signal = self.install.register(prompt);
                reader_info!("Install offer captured as signal {}", signal);
                self.sink.emit(EngineEvent::InstallAvailable { signal });
            }
            EngineCommand::PromptInstall { signal } => {
                let Some(prompt) = self.install.take(signal) else {
                    reader_debug!("Install signal {} already used or unknown", signal);
                    return;
                };
                let sink = self.sink.clone();
                tokio::spawn(async move {
                    let outcome = prompt.prompt().await;
                    reader_info!("Install prompt {} resolved: {:?}", signal, outcome);
                    sink.emit(EngineEvent::InstallResolved { signal, outcome });
                });
            }
            EngineCommand::DiscardInstall { signal } => {
                if !self.install.discard(signal) {
                    reader_debug!("Install signal {} already gone", signal);
                }
            }
        }
    }
}
