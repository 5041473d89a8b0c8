/// Identifies one environment install signal held by the engine.
pub type SignalId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

/// Install-offer lifecycle.
///
/// A signal sits in `offer` until the user triggers it, then moves to
/// `prompting` until it resolves. The handle is one-shot: after a dismissal
/// the offer stays gone until the environment raises a fresh signal. After an
/// acceptance no further signal is taken.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstallState {
    offer: Option<SignalId>,
    prompting: Option<SignalId>,
    installed: bool,
}

impl InstallState {
    pub fn is_available(&self) -> bool {
        self.offer.is_some() && self.prompting.is_none() && !self.installed
    }

    pub fn is_prompting(&self) -> bool {
        self.prompting.is_some()
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Records a fresh signal. Returns signals whose handles should be dropped.
    pub(crate) fn signal_received(&mut self, signal: SignalId) -> Option<SignalId> {
        if self.installed {
            return Some(signal);
        }
        self.offer.replace(signal)
    }

    pub(crate) fn begin_prompt(&mut self) -> Option<SignalId> {
        if !self.is_available() {
            return None;
        }
        let signal = self.offer.take()?;
        self.prompting = Some(signal);
        Some(signal)
    }

    /// Applies a prompt outcome. Returns `None` when `signal` is not the
    /// pending prompt, otherwise the signals to drop.
    pub(crate) fn resolve(
        &mut self,
        signal: SignalId,
        outcome: InstallOutcome,
    ) -> Option<Vec<SignalId>> {
        if self.prompting != Some(signal) {
            return None;
        }
        self.prompting = None;
        match outcome {
            InstallOutcome::Accepted => {
                self.installed = true;
                Some(self.offer.take().into_iter().collect())
            }
            InstallOutcome::Dismissed => Some(Vec::new()),
        }
    }
}
