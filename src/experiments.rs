//! Experiment flags and the canary channel.

use crate::platform::HostWindow;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Source of experiment state for a host window.
pub trait ExperimentSource: Send + Sync {
    /// Snapshot of the active experiment toggles.
    fn toggles(&self, window: &dyn HostWindow) -> BTreeMap<String, bool>;

    /// Whether the host runs the canary (pre-release) channel.
    fn is_canary(&self, window: &dyn HostWindow) -> bool;
}

/// Per-host experiment registry.
///
/// One registry instance serves one host window, so the window argument on
/// the trait methods is not consulted here.
pub struct ExperimentRegistry {
    toggles: RwLock<BTreeMap<String, bool>>,
    canary: bool,
}

impl ExperimentRegistry {
    pub fn new() -> Self {
        Self::with_canary(false)
    }

    pub fn with_canary(canary: bool) -> Self {
        Self {
            toggles: RwLock::new(BTreeMap::new()),
            canary,
        }
    }

    /// Set an experiment toggle.
    pub fn set(&self, experiment: &str, on: bool) {
        self.toggles.write().insert(experiment.to_string(), on);
    }

    /// Remove an experiment toggle entirely.
    pub fn clear(&self, experiment: &str) {
        self.toggles.write().remove(experiment);
    }

    /// Ordered snapshot of the current toggles.
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.toggles.read().clone()
    }
}

impl Default for ExperimentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperimentSource for ExperimentRegistry {
    fn toggles(&self, _window: &dyn HostWindow) -> BTreeMap<String, bool> {
        self.snapshot()
    }

    fn is_canary(&self, _window: &dyn HostWindow) -> bool {
        self.canary
    }
}
