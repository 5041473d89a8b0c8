use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::{EngineEvent, EventSink};

/// Delayed "copied" reset. Scheduling again aborts the pending reset, so at
/// most one expiry is ever outstanding.
///
/// Must be used from within a tokio runtime.
#[derive(Default)]
pub struct CopyResetTimer {
    pending: Option<JoinHandle<()>>,
}

impl CopyResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, generation: u64, after: Duration, sink: Arc<dyn EventSink>) {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            sink.emit(EngineEvent::CopyResetElapsed { generation });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for CopyResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
