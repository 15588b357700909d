use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// Monotonic counters describing what the service has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStats {
    /// Updates that served the cached component unchanged.
    pub reused: u64,
    /// Updates that generated and committed a new component.
    pub regenerated: u64,
    /// Updates that failed in identity resolution, extraction, or generation.
    pub failed: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    reused: AtomicU64,
    regenerated: AtomicU64,
    failed: AtomicU64,
}

impl Counters {
    pub(crate) fn record_reused(&self) {
        self.reused.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_regenerated(&self) {
        self.regenerated.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ServiceStats {
        ServiceStats {
            reused: self.reused.load(Ordering::Relaxed),
            regenerated: self.regenerated.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}
