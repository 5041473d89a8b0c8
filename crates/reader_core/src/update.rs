use crate::{AppState, Effect, Msg, COPY_FEEDBACK_DURATION, PLAIN_TEXT_MEDIA_TYPE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(url) => {
            if state.extraction_mut().set_url_input(url) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::UrlSubmitted => match state.extraction_mut().begin() {
            Some((request_id, url)) => {
                state.mark_dirty();
                vec![Effect::RequestExtraction { request_id, url }]
            }
            None => Vec::new(),
        },
        Msg::ExtractionDone { request_id, result } => {
            if state.extraction_mut().complete(request_id, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CopyClicked => {
            let Some(text) = state.extraction().result_text().map(ToOwned::to_owned) else {
                return (state, Vec::new());
            };
            let generation = state.copy_mut().mark_copied();
            state.mark_dirty();
            vec![
                Effect::WriteClipboard { text },
                Effect::ScheduleCopyReset {
                    generation,
                    after: COPY_FEEDBACK_DURATION,
                },
            ]
        }
        Msg::CopyResetElapsed { generation } => {
            if state.copy_mut().expire(generation) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DownloadClicked { filename } => match state.extraction().result_text() {
            Some(text) => vec![Effect::SaveFile {
                filename,
                contents: text.as_bytes().to_vec(),
                media_type: PLAIN_TEXT_MEDIA_TYPE,
            }],
            None => Vec::new(),
        },
        Msg::InstallAvailable { signal } => {
            let discarded = state.install_mut().signal_received(signal);
            state.mark_dirty();
            discarded
                .map(|signal| Effect::DiscardInstallSignal { signal })
                .into_iter()
                .collect()
        }
        Msg::InstallClicked => match state.install_mut().begin_prompt() {
            Some(signal) => {
                state.mark_dirty();
                vec![Effect::PromptInstall { signal }]
            }
            None => Vec::new(),
        },
        Msg::InstallResolved { signal, outcome } => {
            match state.install_mut().resolve(signal, outcome) {
                Some(discarded) => {
                    state.mark_dirty();
                    discarded
                        .into_iter()
                        .map(|signal| Effect::DiscardInstallSignal { signal })
                        .collect()
                }
                None => Vec::new(),
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
