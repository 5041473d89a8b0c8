pub type RequestId = u64;

/// Shown for every failed extraction; failure kinds are not told apart.
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Could not extract content from that page. Check that the extraction service is running and try again.";

pub const DEFAULT_DOWNLOAD_FILENAME: &str = "extracted-content.md";

/// Lifecycle of the single live extraction request.
///
/// The result text and the error message live inside the terminal variants,
/// so at most one of them exists and neither exists while idle or loading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtractionStatus {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Succeeded {
        text: String,
    },
    Failed {
        message: String,
    },
}

/// What the collaborator produced, already collapsed to success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Text(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionState {
    url_input: String,
    status: ExtractionStatus,
    last_request_id: RequestId,
}

impl ExtractionState {
    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn status(&self) -> &ExtractionStatus {
        &self.status
    }

    pub fn result_text(&self) -> Option<&str> {
        match &self.status {
            ExtractionStatus::Succeeded { text } => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            ExtractionStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match self.status {
            ExtractionStatus::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    /// Returns false when the input did not change.
    pub(crate) fn set_url_input(&mut self, url: String) -> bool {
        if self.url_input == url {
            return false;
        }
        self.url_input = url;
        true
    }

    /// Starts a new request for the current input, superseding any in-flight one.
    ///
    /// Only an exactly empty input is refused; whitespace is passed through.
    pub(crate) fn begin(&mut self) -> Option<(RequestId, String)> {
        if self.url_input.is_empty() {
            return None;
        }
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.status = ExtractionStatus::Loading { request_id };
        Some((request_id, self.url_input.clone()))
    }

    /// Applies a completion. Completions for superseded requests are dropped.
    pub(crate) fn complete(&mut self, request_id: RequestId, result: ExtractionResult) -> bool {
        if self.in_flight() != Some(request_id) {
            return false;
        }
        self.status = match result {
            ExtractionResult::Text(text) => ExtractionStatus::Succeeded { text },
            ExtractionResult::Failed => ExtractionStatus::Failed {
                message: EXTRACTION_FAILED_MESSAGE.to_string(),
            },
        };
        true
    }
}
