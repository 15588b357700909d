use serde::Deserialize;
use serde::Serialize;
use specsync_model::SpecIdentity;
use specsync_model::SpecKind;
use specsync_syntax::TypeRef;

/// The generated artifact: the in-memory surface of a component class.
///
/// This is what editors resolve references against while the project's real
/// codegen output is stale or absent. It is a value type; the generation
/// service wraps it in `Arc` and reuses the same allocation for as long as
/// the owning spec's interface stays unchanged, so hosts may compare
/// artifacts by pointer to detect regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentClass {
    /// Qualified name, e.g. `com.example.Counter`.
    pub qualified_name: String,
    /// Simple name, e.g. `Counter`.
    pub name: String,
    /// The spec this component was generated from.
    pub spec: SpecIdentity,
    pub kind: SpecKind,
    pub members: Vec<ComponentMember>,
}

impl ComponentClass {
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&ComponentMember> {
        self.members.iter().find(|member| member.name == name)
    }

    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.member(name).is_some()
    }
}

/// A single member of the generated component surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMember {
    pub name: String,
    pub kind: MemberKind,
}

/// What a generated member is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    /// The static factory that opens the component's builder.
    Factory,
    /// A builder setter for one prop.
    PropSetter { ty: TypeRef, required: bool },
    /// An event handler accessor.
    EventHandler { event: Option<TypeRef> },
}
