use std::time::Duration;

/// How long the "copied" indicator stays on after a copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Transient "copied" flag.
///
/// Every copy bumps `generation`; a reset only applies when it carries the
/// latest generation, so an older pending reset can never clear a newer copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    pub(crate) fn expire(&mut self, generation: u64) -> bool {
        if !self.copied || generation != self.generation {
            return false;
        }
        self.copied = false;
        true
    }
}
