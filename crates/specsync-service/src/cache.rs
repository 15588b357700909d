//! The pair cache: last committed model and generated component per spec.

use std::sync::Arc;

use specsync_generate::ComponentClass;
use specsync_model::SpecIdentity;
use specsync_model::SpecModel;

use crate::collections::FxDashMap;

/// The committed (model, component) pair for one spec.
///
/// The two halves travel together: the component is always exactly the one
/// generated from the model beside it. Readers receive the entry as a single
/// value, so a model from one update can never be observed next to a
/// component from another.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub model: Arc<SpecModel>,
    pub component: Arc<ComponentClass>,
}

/// Shared cache of committed spec models and their generated components.
///
/// Cloning is cheap; clones observe the same cache.
#[derive(Debug, Clone, Default)]
pub struct SpecModelCache {
    inner: Arc<FxDashMap<SpecIdentity, CacheEntry>>,
}

impl SpecModelCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last committed model for a spec, if one exists.
    #[must_use]
    pub fn get(&self, identity: &SpecIdentity) -> Option<Arc<SpecModel>> {
        self.inner
            .get(identity)
            .map(|entry| Arc::clone(&entry.model))
    }

    /// Last committed component for a spec, if one exists.
    #[must_use]
    pub fn get_component(&self, identity: &SpecIdentity) -> Option<Arc<ComponentClass>> {
        self.inner
            .get(identity)
            .map(|entry| Arc::clone(&entry.component))
    }

    /// Snapshot of the committed pair.
    #[must_use]
    pub fn get_entry(&self, identity: &SpecIdentity) -> Option<CacheEntry> {
        self.inner.get(identity).map(|entry| entry.clone())
    }

    /// Replace the committed pair for a spec.
    pub fn put(
        &self,
        identity: SpecIdentity,
        model: Arc<SpecModel>,
        component: Arc<ComponentClass>,
    ) {
        tracing::debug!("Caching regenerated component for {}", identity);
        self.inner.insert(identity, CacheEntry { model, component });
    }

    /// Drop a spec's committed pair, returning it if one was present.
    #[must_use]
    pub fn invalidate(&self, identity: &SpecIdentity) -> Option<CacheEntry> {
        let removed = self.inner.remove(identity).map(|(_, entry)| entry);
        if removed.is_some() {
            tracing::debug!("Invalidated cached component for {}", identity);
        }
        removed
    }

    /// Drop every committed pair.
    pub fn clear(&self) {
        self.inner.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
