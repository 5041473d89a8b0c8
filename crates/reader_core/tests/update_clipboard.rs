use reader_core::{update, AppState, Effect, ExtractionResult, Msg, COPY_FEEDBACK_DURATION};

fn init_logging() {
    reader_logging::initialize_for_tests();
}

fn succeeded_with(text: &str) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged("https://example.org/a".to_string()),
    );
    let (state, _) = update(state, Msg::UrlSubmitted);
    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            request_id: 1,
            result: ExtractionResult::Text(text.to_string()),
        },
    );
    state
}

fn scheduled_generation(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleCopyReset { generation, .. } => Some(*generation),
            _ => None,
        })
        .expect("reset scheduled")
}

#[test]
fn copy_writes_result_and_schedules_reset() {
    init_logging();
    let state = succeeded_with("Hello");

    let (state, effects) = update(state, Msg::CopyClicked);

    assert!(state.view().copied);
    assert_eq!(
        effects,
        vec![
            Effect::WriteClipboard {
                text: "Hello".to_string(),
            },
            Effect::ScheduleCopyReset {
                generation: 1,
                after: COPY_FEEDBACK_DURATION,
            },
        ]
    );
    assert_eq!(COPY_FEEDBACK_DURATION.as_millis(), 2000);
}

#[test]
fn copy_is_noop_unless_succeeded() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::CopyClicked);
    assert!(effects.is_empty());
    assert!(!state.view().copied);

    let (state, _) = update(state, Msg::InputChanged("https://example.org".to_string()));
    let (state, _) = update(state, Msg::UrlSubmitted);
    let (state, effects) = update(state, Msg::CopyClicked);
    assert!(effects.is_empty());
    assert!(!state.view().copied);

    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            request_id: 1,
            result: ExtractionResult::Failed,
        },
    );
    let (state, effects) = update(state, Msg::CopyClicked);
    assert!(effects.is_empty());
    assert!(!state.view().copied);
}

#[test]
fn reset_clears_copied_flag() {
    init_logging();
    let (state, effects) = update(succeeded_with("Hello"), Msg::CopyClicked);
    let generation = scheduled_generation(&effects);

    let (state, effects) = update(state, Msg::CopyResetElapsed { generation });

    assert!(effects.is_empty());
    assert!(!state.view().copied);
}

#[test]
fn second_copy_supersedes_pending_reset() {
    init_logging();
    let (state, first) = update(succeeded_with("Hello"), Msg::CopyClicked);
    let (state, second) = update(state, Msg::CopyClicked);
    let first = scheduled_generation(&first);
    let second = scheduled_generation(&second);
    assert_ne!(first, second);

    let (mut state, _) = update(state, Msg::CopyResetElapsed { generation: first });
    assert!(state.view().copied);
    state.consume_dirty();

    let (mut state, _) = update(state, Msg::CopyResetElapsed { generation: first });
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::CopyResetElapsed { generation: second });
    assert!(!state.view().copied);
}

#[test]
fn copy_sends_text_verbatim() {
    init_logging();
    let text = "  # Title\n\nBody\t\n";
    let (_state, effects) = update(succeeded_with(text), Msg::CopyClicked);

    assert!(matches!(
        &effects[0],
        Effect::WriteClipboard { text: copied } if copied == text
    ));
}
