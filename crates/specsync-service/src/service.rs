use std::sync::Arc;

use specsync_extract::spec_identity;
use specsync_generate::ComponentClass;
use specsync_generate::ComponentClassGenerator;
use specsync_generate::ComponentGenerator;
use specsync_model::SpecIdentity;
use specsync_model::SpecModel;
use specsync_syntax::ClassDecl;

use crate::cache::CacheEntry;
use crate::cache::SpecModelCache;
use crate::error::GenerateError;
use crate::extractor::SpecModelExtractor;
use crate::extractor::StructuralExtractor;
use crate::listeners::ListenerId;
use crate::listeners::ListenerRegistry;
use crate::listeners::SpecUpdateListener;
use crate::locks::IdentityLocks;
use crate::stats::Counters;
use crate::stats::ServiceStats;

/// Keeps generated components in sync with their spec classes.
///
/// One instance serves a whole project. Cloning is cheap and clones share
/// the cache, the update locks, the listener registry, and the counters.
#[derive(Clone)]
pub struct ComponentGenerateService {
    cache: SpecModelCache,
    locks: IdentityLocks,
    listeners: ListenerRegistry,
    counters: Arc<Counters>,
    extractor: Arc<dyn SpecModelExtractor>,
    generator: Arc<dyn ComponentGenerator>,
}

impl std::fmt::Debug for ComponentGenerateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentGenerateService")
            .field("cached_specs", &self.cache.len())
            .finish()
    }
}

impl Default for ComponentGenerateService {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentGenerateService {
    /// Service with the default extractor and generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_collaborators(
            Arc::new(StructuralExtractor),
            Arc::new(ComponentClassGenerator),
        )
    }

    /// Service with injected collaborators.
    #[must_use]
    pub fn with_collaborators(
        extractor: Arc<dyn SpecModelExtractor>,
        generator: Arc<dyn ComponentGenerator>,
    ) -> Self {
        Self {
            cache: SpecModelCache::new(),
            locks: IdentityLocks::default(),
            listeners: ListenerRegistry::default(),
            counters: Arc::new(Counters::default()),
            extractor,
            generator,
        }
    }

    /// Bring the generated component for `class` up to date and return it.
    ///
    /// Extracts the structural model from the snapshot and compares it to
    /// the last committed model for the same spec. When the interfaces are
    /// equal the previously generated component is returned untouched (the
    /// same allocation, so `Arc::ptr_eq` holds across calls). Otherwise a
    /// new component is generated, committed together with its model, and
    /// returned; subscribed listeners hear about the commit.
    ///
    /// On any error the cache keeps whatever pair was last committed.
    ///
    /// Concurrent updates of the same spec serialize on a per-spec lock;
    /// updates of different specs do not contend.
    ///
    /// # Panics
    ///
    /// Panics if the spec's update mutex is poisoned (another thread
    /// panicked mid-update).
    pub fn update_component_sync(
        &self,
        class: &ClassDecl,
    ) -> Result<Arc<ComponentClass>, GenerateError> {
        let identity = match spec_identity(class) {
            Ok(identity) => identity,
            Err(err) => {
                self.counters.record_failed();
                return Err(GenerateError::Model(err));
            }
        };

        let lock = self.locks.lock_for(&identity);
        let guard = lock.lock().expect("spec update mutex poisoned");

        let new_model = match self.extractor.extract(class) {
            Ok(model) => model,
            Err(err) => {
                self.counters.record_failed();
                tracing::debug!("Model computation for {} failed: {}", identity, err);
                return Err(GenerateError::Model(err));
            }
        };
        debug_assert_eq!(
            new_model.identity, identity,
            "extractor rekeyed the model away from the snapshot's identity"
        );

        if let Some(entry) = self.cache.get_entry(&identity) {
            if *entry.model == new_model {
                self.counters.record_reused();
                tracing::debug!("Interface of {} unchanged, reusing component", identity);
                return Ok(entry.component);
            }
        }

        let component = match self.generator.generate(&new_model) {
            Ok(component) => component,
            Err(err) => {
                self.counters.record_failed();
                tracing::warn!("Component generation for {} failed: {}", identity, err);
                return Err(GenerateError::Generation(err));
            }
        };

        let model = Arc::new(new_model);
        let component = Arc::new(component);
        self.cache
            .put(identity.clone(), Arc::clone(&model), Arc::clone(&component));
        self.counters.record_regenerated();
        tracing::info!(
            "Regenerated component {} from {}",
            component.qualified_name,
            identity
        );

        // Listeners run outside the update lock so they can re-enter the
        // service.
        drop(guard);
        self.listeners.notify(&identity, &model, &component);

        Ok(component)
    }

    /// Last committed structural model for the snapshot's spec.
    ///
    /// Resolves only the snapshot's identity; no extraction happens. A
    /// freshly reparsed instance of a known spec finds the model a previous
    /// update committed. Unknown specs, including classes without a
    /// qualified name, return `None`.
    #[must_use]
    pub fn get_spec_model(&self, class: &ClassDecl) -> Option<Arc<SpecModel>> {
        let identity = spec_identity(class).ok()?;
        self.cache.get(&identity)
    }

    /// Last committed generated component for a spec.
    #[must_use]
    pub fn get_component(&self, identity: &SpecIdentity) -> Option<Arc<ComponentClass>> {
        self.cache.get_component(identity)
    }

    /// Snapshot of a spec's committed (model, component) pair.
    #[must_use]
    pub fn get_entry(&self, identity: &SpecIdentity) -> Option<CacheEntry> {
        self.cache.get_entry(identity)
    }

    /// Forget a spec. The next update regenerates from scratch.
    #[must_use]
    pub fn invalidate(&self, identity: &SpecIdentity) -> Option<CacheEntry> {
        self.cache.invalidate(identity)
    }

    /// Forget every spec.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Number of specs with a committed pair.
    #[must_use]
    pub fn cached_specs(&self) -> usize {
        self.cache.len()
    }

    /// Register a listener for committed regenerations.
    #[must_use]
    pub fn subscribe(&self, listener: Arc<dyn SpecUpdateListener>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a previously registered listener. Returns whether it was
    /// still registered.
    #[must_use]
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Counter snapshot since the service was created.
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        self.counters.snapshot()
    }
}
