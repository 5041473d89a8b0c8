use std::collections::HashMap;

use futures_util::future::BoxFuture;

use crate::{InstallOutcome, SignalId};

/// An environment offer to install the app, deferred until the user asks.
pub trait DeferredInstallPrompt: Send {
    /// Stops the environment from showing its own install UI for this offer.
    fn suppress_default(&mut self);

    /// Shows the install prompt. Consumes the offer: it cannot be shown twice.
    fn prompt(self: Box<Self>) -> BoxFuture<'static, InstallOutcome>;
}

/// Holds captured install offers until they are prompted or discarded.
#[derive(Default)]
pub struct InstallSignalRegistry {
    last_signal: SignalId,
    pending: HashMap<SignalId, Box<dyn DeferredInstallPrompt>>,
}

impl InstallSignalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures an offer and suppresses its default handling.
    pub fn register(&mut self, mut prompt: Box<dyn DeferredInstallPrompt>) -> SignalId {
        prompt.suppress_default();
        self.last_signal += 1;
        self.pending.insert(self.last_signal, prompt);
        self.last_signal
    }

    /// Removes the offer for prompting. `None` if unknown or already used.
    pub fn take(&mut self, signal: SignalId) -> Option<Box<dyn DeferredInstallPrompt>> {
        self.pending.remove(&signal)
    }

    pub fn discard(&mut self, signal: SignalId) -> bool {
        self.pending.remove(&signal).is_some()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
