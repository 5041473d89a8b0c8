use crate::view_model::{AppViewModel, ExtractionPhase};
use crate::{CopyFeedback, ExtractionState, ExtractionStatus, InstallState};

/// The two controllers' state containers plus the copy feedback flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    extraction: ExtractionState,
    copy: CopyFeedback,
    install: InstallState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extraction(&self) -> &ExtractionState {
        &self.extraction
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy
    }

    pub fn install(&self) -> &InstallState {
        &self.install
    }

    pub fn view(&self) -> AppViewModel {
        let status = match self.extraction.status() {
            ExtractionStatus::Idle => ExtractionPhase::Idle,
            ExtractionStatus::Loading { .. } => ExtractionPhase::Loading,
            ExtractionStatus::Succeeded { .. } => ExtractionPhase::Succeeded,
            ExtractionStatus::Failed { .. } => ExtractionPhase::Failed,
        };
        AppViewModel {
            url_input: self.extraction.url_input().to_string(),
            status,
            result_text: self.extraction.result_text().map(ToOwned::to_owned),
            error_message: self.extraction.error_message().map(ToOwned::to_owned),
            copied: self.copy.is_copied(),
            install_available: self.install.is_available(),
            install_prompting: self.install.is_prompting(),
            installed: self.install.is_installed(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn extraction_mut(&mut self) -> &mut ExtractionState {
        &mut self.extraction
    }

    pub(crate) fn copy_mut(&mut self) -> &mut CopyFeedback {
        &mut self.copy
    }

    pub(crate) fn install_mut(&mut self) -> &mut InstallState {
        &mut self.install
    }
}
