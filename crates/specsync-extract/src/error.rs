use specsync_model::SpecKind;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ModelComputationError {
    #[error("Class `{class}` has no qualified name")]
    MissingQualifiedName { class: String },

    #[error("Class `{class}` carries no spec annotation")]
    NotASpec { class: String },

    #[error("Class `{class}` carries both `{first}` and `{second}`")]
    ConflictingSpecAnnotations {
        class: String,
        first: String,
        second: String,
    },

    #[error("Spec name `{class}` must end in `Spec` with a non-empty stem")]
    MalformedSpecName { class: String },

    #[error("Prop `{name}` is declared as both {existing} and {conflicting}")]
    ConflictingProp {
        name: String,
        existing: String,
        conflicting: String,
    },

    #[error("State `{name}` is declared as both {existing} and {conflicting}")]
    ConflictingState {
        name: String,
        existing: String,
        conflicting: String,
    },

    #[error("Event method `{name}` is declared more than once")]
    DuplicateEvent { name: String },

    #[error("A {kind} spec must declare a method annotated with `{annotation}`")]
    MissingRequiredDelegate { kind: SpecKind, annotation: String },
}
