use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use specsync_generate::ComponentClass;
use specsync_model::SpecIdentity;
use specsync_model::SpecModel;

use crate::collections::FxDashMap;

/// Observer of committed regenerations.
///
/// Editors subscribe to refresh line markers and resolve highlighting when a
/// component actually changes; reuse of an unchanged component is invisible
/// to listeners. Callbacks run after the update lock is released, so a
/// listener may re-enter the service freely. What it observes is the
/// committed state or a later one, never a pre-commit state.
pub trait SpecUpdateListener: Send + Sync {
    fn on_component_updated(
        &self,
        identity: &SpecIdentity,
        model: &Arc<SpecModel>,
        component: &Arc<ComponentClass>,
    );
}

/// Token identifying a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone, Default)]
pub(crate) struct ListenerRegistry {
    next_id: Arc<AtomicU64>,
    listeners: Arc<FxDashMap<u64, Arc<dyn SpecUpdateListener>>>,
}

impl ListenerRegistry {
    pub(crate) fn subscribe(&self, listener: Arc<dyn SpecUpdateListener>) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.insert(id, listener);
        ListenerId(id)
    }

    pub(crate) fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.remove(&id.0).is_some()
    }

    pub(crate) fn notify(
        &self,
        identity: &SpecIdentity,
        model: &Arc<SpecModel>,
        component: &Arc<ComponentClass>,
    ) {
        // Snapshot before invoking: a callback may subscribe or unsubscribe
        // without deadlocking against this iteration.
        let snapshot: Vec<Arc<dyn SpecUpdateListener>> = self
            .listeners
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        for listener in snapshot {
            listener.on_component_updated(identity, model, component);
        }
    }
}
