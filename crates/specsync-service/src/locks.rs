use std::sync::Arc;
use std::sync::Mutex;

use specsync_model::SpecIdentity;

use crate::collections::FxDashMap;

/// Per-spec update locks.
///
/// An update holds its spec's lock across the whole
/// extract-compare-generate-commit sequence, so concurrent updates of one
/// spec serialize while updates of different specs proceed independently.
/// Locks are created on first use and live as long as the service.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdentityLocks {
    inner: Arc<FxDashMap<SpecIdentity, Arc<Mutex<()>>>>,
}

impl IdentityLocks {
    pub(crate) fn lock_for(&self, identity: &SpecIdentity) -> Arc<Mutex<()>> {
        let lock = self
            .inner
            .entry(identity.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())));
        Arc::clone(&lock)
    }
}
