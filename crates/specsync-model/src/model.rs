use serde::Deserialize;
use serde::Serialize;
use specsync_syntax::TypeRef;

use crate::identity::SpecIdentity;

/// Which component family a spec declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecKind {
    /// Composes other components into a layout tree.
    Layout,
    /// Mounts a concrete piece of host UI content.
    Mount,
}

impl std::fmt::Display for SpecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecKind::Layout => f.write_str("layout"),
            SpecKind::Mount => f.write_str("mount"),
        }
    }
}

/// The generation-relevant interface of a spec, extracted from a class
/// snapshot.
///
/// All collections are sorted by name at extraction time, so the derived
/// `PartialEq` compares interfaces independent of declaration order. Two
/// snapshots of a spec produce equal models exactly when the generated
/// component would come out the same, which is the condition the service
/// checks before deciding to regenerate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecModel {
    pub identity: SpecIdentity,
    pub kind: SpecKind,
    /// Qualified name of the component generated from this spec (the spec's
    /// qualified name with the `Spec` suffix stripped).
    pub component_name: String,
    pub props: Vec<PropModel>,
    pub states: Vec<StateModel>,
    pub events: Vec<EventModel>,
    pub delegates: Vec<DelegateModel>,
}

impl SpecModel {
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&PropModel> {
        self.props.iter().find(|prop| prop.name == name)
    }

    #[must_use]
    pub fn state(&self, name: &str) -> Option<&StateModel> {
        self.states.iter().find(|state| state.name == name)
    }

    #[must_use]
    pub fn event(&self, name: &str) -> Option<&EventModel> {
        self.events.iter().find(|event| event.name == name)
    }

    #[must_use]
    pub fn delegate(&self, annotation: &str) -> Option<&DelegateModel> {
        self.delegates
            .iter()
            .find(|delegate| delegate.annotation == annotation)
    }
}

/// An input the component's builder exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropModel {
    pub name: String,
    pub ty: TypeRef,
    pub optional: bool,
}

/// A piece of internal component state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateModel {
    pub name: String,
    pub ty: TypeRef,
}

/// An event handler the component exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventModel {
    pub name: String,
    /// The event type the handler accepts, when the spec declares one.
    pub event: Option<TypeRef>,
    pub params: Vec<TypeRef>,
}

/// A lifecycle method the generated component delegates back to the spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateModel {
    /// The lifecycle annotation that marked the method.
    pub annotation: String,
    pub name: String,
    pub params: Vec<TypeRef>,
    pub returns: Option<TypeRef>,
}
