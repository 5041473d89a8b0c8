use std::sync::Once;

use reader_core::{
    update, AppState, Effect, ExtractionPhase, ExtractionResult, Msg, RequestId,
    DEFAULT_DOWNLOAD_FILENAME, EXTRACTION_FAILED_MESSAGE, PLAIN_TEXT_MEDIA_TYPE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn submit_url(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(url.to_string()));
    update(state, Msg::UrlSubmitted)
}

fn requested_id(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::RequestExtraction { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("request effect")
}

fn complete(state: AppState, request_id: RequestId, text: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::ExtractionDone {
            request_id,
            result: ExtractionResult::Text(text.to_string()),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn submit_moves_to_loading_before_any_response() {
    init_logging();
    let (mut state, effects) = submit_url(AppState::new(), "https://example.org/a");

    let view = state.view();
    assert_eq!(view.status, ExtractionPhase::Loading);
    assert_eq!(view.result_text, None);
    assert_eq!(view.error_message, None);
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::RequestExtraction {
            request_id: 1,
            url: "https://example.org/a".to_string(),
        }]
    );
}

#[test]
fn successful_response_is_stored() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.org/a");
    let state = complete(state, requested_id(&effects), "Hello");

    let view = state.view();
    assert_eq!(view.status, ExtractionPhase::Succeeded);
    assert_eq!(view.result_text.as_deref(), Some("Hello"));
    assert_eq!(view.error_message, None);
}

#[test]
fn failed_response_reports_generic_message() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.org/a");
    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            request_id: requested_id(&effects),
            result: ExtractionResult::Failed,
        },
    );

    let view = state.view();
    assert_eq!(view.status, ExtractionPhase::Failed);
    assert_eq!(view.error_message.as_deref(), Some(EXTRACTION_FAILED_MESSAGE));
    assert_eq!(view.result_text, None);
}

#[test]
fn empty_submit_keeps_existing_result() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.org/a");
    let mut state = complete(state, requested_id(&effects), "Hello");
    state.consume_dirty();

    let (state, _) = update(state, Msg::InputChanged(String::new()));
    let before = state.clone();
    let (state, effects) = update(state, Msg::UrlSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert_eq!(state.view().status, ExtractionPhase::Succeeded);
    assert_eq!(state.view().result_text.as_deref(), Some("Hello"));
}

#[test]
fn empty_submit_from_idle_is_noop() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::UrlSubmitted);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn whitespace_url_is_still_submitted() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "  ");

    assert_eq!(state.view().status, ExtractionPhase::Loading);
    assert_eq!(
        effects,
        vec![Effect::RequestExtraction {
            request_id: 1,
            url: "  ".to_string(),
        }]
    );
}

#[test]
fn resubmit_clears_previous_error() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.org/a");
    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            request_id: requested_id(&effects),
            result: ExtractionResult::Failed,
        },
    );
    assert_eq!(state.view().status, ExtractionPhase::Failed);

    let (state, _) = update(state, Msg::UrlSubmitted);
    let view = state.view();
    assert_eq!(view.status, ExtractionPhase::Loading);
    assert_eq!(view.error_message, None);
}

#[test]
fn stale_response_does_not_overwrite_newer_submission() {
    init_logging();
    let (state, first) = submit_url(AppState::new(), "https://a.example.org");
    let (state, second) = submit_url(state, "https://b.example.org");
    let first_id = requested_id(&first);
    let second_id = requested_id(&second);
    assert_ne!(first_id, second_id);

    let state = complete(state, second_id, "B");
    let state = complete(state, first_id, "A");

    assert_eq!(state.view().result_text.as_deref(), Some("B"));
}

#[test]
fn stale_response_is_ignored_while_newer_is_loading() {
    init_logging();
    let (state, first) = submit_url(AppState::new(), "https://a.example.org");
    let (mut state, _second) = submit_url(state, "https://b.example.org");
    state.consume_dirty();

    let mut state = complete(state, requested_id(&first), "A");

    assert_eq!(state.view().status, ExtractionPhase::Loading);
    assert!(!state.consume_dirty());
}

#[test]
fn repeated_completion_is_ignored() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.org/a");
    let request_id = requested_id(&effects);
    let state = complete(state, request_id, "first");
    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            request_id,
            result: ExtractionResult::Failed,
        },
    );

    assert_eq!(state.view().status, ExtractionPhase::Succeeded);
    assert_eq!(state.view().result_text.as_deref(), Some("first"));
}

#[test]
fn download_payload_matches_result_verbatim() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.org/a");
    let text = "# Title\nBody text";
    let state = complete(state, requested_id(&effects), text);
    assert_eq!(state.view().result_text.as_deref(), Some(text));

    let before = state.clone();
    let (state, effects) = update(
        state,
        Msg::DownloadClicked {
            filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
        },
    );

    assert_eq!(state, before);
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::SaveFile {
            filename,
            contents,
            media_type,
        } => {
            assert_eq!(filename, DEFAULT_DOWNLOAD_FILENAME);
            assert_eq!(std::str::from_utf8(contents).unwrap(), text);
            assert_eq!(*media_type, PLAIN_TEXT_MEDIA_TYPE);
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn download_keeps_surrounding_whitespace() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.org/a");
    let text = "\n  indented\n\n";
    let state = complete(state, requested_id(&effects), text);

    let (_state, effects) = update(
        state,
        Msg::DownloadClicked {
            filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
        },
    );
    assert!(matches!(
        &effects[..],
        [Effect::SaveFile { contents, .. }] if contents == text.as_bytes()
    ));
}

#[test]
fn download_is_noop_unless_succeeded() {
    init_logging();
    let download = || Msg::DownloadClicked {
        filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
    };

    let (state, effects) = update(AppState::new(), download());
    assert!(effects.is_empty());

    let (state, _) = submit_url(state, "https://example.org/a");
    let (_state, effects) = update(state, download());
    assert!(effects.is_empty());
}
