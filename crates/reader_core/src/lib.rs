//! Reader core: pure state machines for the extraction request and the install offer.
mod copy;
mod effect;
mod extraction;
mod install;
mod msg;
mod state;
mod update;
mod view_model;

pub use copy::{CopyFeedback, COPY_FEEDBACK_DURATION};
pub use effect::{Effect, PLAIN_TEXT_MEDIA_TYPE};
pub use extraction::{
    ExtractionResult, ExtractionState, ExtractionStatus, RequestId, DEFAULT_DOWNLOAD_FILENAME,
    EXTRACTION_FAILED_MESSAGE,
};
pub use install::{InstallOutcome, InstallState, SignalId};
pub use msg::Msg;
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ExtractionPhase};
