use std::time::Duration;

pub const PLAIN_TEXT_MEDIA_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestExtraction {
        request_id: crate::RequestId,
        url: String,
    },
    WriteClipboard {
        text: String,
    },
    ScheduleCopyReset {
        generation: u64,
        after: Duration,
    },
    SaveFile {
        filename: String,
        contents: Vec<u8>,
        media_type: &'static str,
    },
    PromptInstall {
        signal: crate::SignalId,
    },
    DiscardInstallSignal {
        signal: crate::SignalId,
    },
}
