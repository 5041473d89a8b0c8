//! Reader engine: talks to the extraction service and the environment
//! (clipboard, file saving, install offers) on behalf of the core.
mod clipboard;
mod decode;
mod download;
mod engine;
mod fetch;
mod install;
mod timer;
mod types;

pub use clipboard::{osc52_sequence, ClipboardError, ClipboardWriter, Osc52Clipboard};
pub use decode::{decode_text, DecodeError};
pub use download::{ensure_output_dir, DirectoryFileSaver, FileSaver, PersistError};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{Extractor, ExtractorSettings, HttpExtractor, Transport};
pub use install::{DeferredInstallPrompt, InstallSignalRegistry};
pub use timer::CopyResetTimer;
pub use types::{EngineEvent, ExtractError, InstallOutcome, RequestId, SignalId};
