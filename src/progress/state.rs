use tracing::trace;

use crate::math::angle::clamp_progress;

/// An owned progress value with change tracking.
///
/// The value is always within `[0, 1]`. Every change bumps `revision`, so a
/// consumer that remembers the last revision it drew knows when its
/// outline must be rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    progress: f64,
    revision: u64,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ProgressState {
    /// Creates a state holding `initial`, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            progress: clamp_progress(initial),
            revision: 0,
        }
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sets the progress, clamped to `[0, 1]`.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set(&mut self, target: f64) -> bool {
        let next = clamp_progress(target);
        if next.to_bits() == self.progress.to_bits() {
            return false;
        }
        trace!(from = self.progress, to = next, "progress changed");
        self.progress = next;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}
