use crate::{ExtractionResult, InstallOutcome, RequestId, SignalId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    InputChanged(String),
    /// User submitted the current URL input for extraction.
    UrlSubmitted,
    /// The extraction collaborator answered a request.
    ExtractionDone {
        request_id: RequestId,
        result: ExtractionResult,
    },
    /// User clicked Copy.
    CopyClicked,
    /// The copy feedback delay scheduled for `generation` ran out.
    CopyResetElapsed { generation: u64 },
    /// User clicked Download.
    DownloadClicked { filename: String },
    /// The environment offered installation; the engine holds the handle.
    InstallAvailable { signal: SignalId },
    /// User clicked Install.
    InstallClicked,
    /// The install prompt for `signal` was answered.
    InstallResolved {
        signal: SignalId,
        outcome: InstallOutcome,
    },
    /// UI tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
