use std::time::Duration;

pub type RequestId = u64;
pub type SignalId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ExtractionFinished {
        request_id: RequestId,
        result: Result<String, ExtractError>,
    },
    CopyResetElapsed {
        generation: u64,
    },
    InstallAvailable {
        signal: SignalId,
    },
    InstallResolved {
        signal: SignalId,
        outcome: InstallOutcome,
    },
}

/// Everything that can go wrong talking to the extraction service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid extraction endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("extraction service answered with http status {0}")]
    HttpStatus(u16),
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("extraction service returned no content")]
    EmptyPayload,
    #[error(transparent)]
    Decode(#[from] crate::DecodeError),
}
