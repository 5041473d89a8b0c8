use reader_core::{Effect, ExtractionResult, InstallOutcome, Msg};
use reader_engine::{
    ClipboardWriter, DeferredInstallPrompt, EngineEvent, EngineHandle, FileSaver,
};
use reader_logging::{reader_debug, reader_error, reader_info};

use crate::render::Notice;

/// Executes core effects against the engine and the environment, and turns
/// engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn ClipboardWriter>,
    saver: Box<dyn FileSaver>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        clipboard: Box<dyn ClipboardWriter>,
        saver: Box<dyn FileSaver>,
    ) -> Self {
        Self {
            engine,
            clipboard,
            saver,
        }
    }

    pub fn offer_install(&self, prompt: Box<dyn DeferredInstallPrompt>) {
        self.engine.offer_install(prompt);
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::RequestExtraction { request_id, url } => {
                    reader_info!(
                        "RequestExtraction request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.extract(request_id, url);
                }
                Effect::WriteClipboard { text } => {
                    reader_debug!("WriteClipboard len={}", text.len());
                    if let Err(err) = self.clipboard.write_text(&text) {
                        reader_error!("Clipboard write failed: {}", err);
                        notices.push(Notice::CopyFailed(err.to_string()));
                    }
                }
                Effect::ScheduleCopyReset { generation, after } => {
                    self.engine.schedule_copy_reset(generation, after);
                }
                Effect::SaveFile {
                    filename,
                    contents,
                    media_type,
                } => {
                    reader_debug!(
                        "SaveFile filename={} bytes={} type={}",
                        filename,
                        contents.len(),
                        media_type
                    );
                    match self.saver.save(&filename, &contents) {
                        Ok(path) => {
                            reader_info!("Saved download to {:?}", path);
                            notices.push(Notice::Saved(path));
                        }
                        Err(err) => {
                            reader_error!("Saving {} failed: {}", filename, err);
                            notices.push(Notice::SaveFailed(err.to_string()));
                        }
                    }
                }
                Effect::PromptInstall { signal } => self.engine.prompt_install(signal),
                Effect::DiscardInstallSignal { signal } => self.engine.discard_install(signal),
            }
        }
        notices
    }

    /// Drains pending engine events as core messages.
    pub fn drain_events(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ExtractionFinished { request_id, result } => Msg::ExtractionDone {
            request_id,
            result: match result {
                Ok(text) => ExtractionResult::Text(text),
                Err(_) => ExtractionResult::Failed,
            },
        },
        EngineEvent::CopyResetElapsed { generation } => Msg::CopyResetElapsed { generation },
        EngineEvent::InstallAvailable { signal } => Msg::InstallAvailable { signal },
        EngineEvent::InstallResolved { signal, outcome } => Msg::InstallResolved {
            signal,
            outcome: map_outcome(outcome),
        },
    }
}

fn map_outcome(outcome: reader_engine::InstallOutcome) -> InstallOutcome {
    match outcome {
        reader_engine::InstallOutcome::Accepted => InstallOutcome::Accepted,
        reader_engine::InstallOutcome::Dismissed => InstallOutcome::Dismissed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reader_engine::ExtractError;

    #[test]
    fn any_extraction_error_collapses_to_failed() {
        for err in [
            ExtractError::EmptyPayload,
            ExtractError::HttpStatus(404),
            ExtractError::Network("refused".to_string()),
        ] {
            assert_eq!(
                map_event(EngineEvent::ExtractionFinished {
                    request_id: 3,
                    result: Err(err),
                }),
                Msg::ExtractionDone {
                    request_id: 3,
                    result: ExtractionResult::Failed,
                }
            );
        }
    }

    #[test]
    fn extracted_text_passes_through() {
        assert_eq!(
            map_event(EngineEvent::ExtractionFinished {
                request_id: 1,
                result: Ok(" text ".to_string()),
            }),
            Msg::ExtractionDone {
                request_id: 1,
                result: ExtractionResult::Text(" text ".to_string()),
            }
        );
    }
}
