//! Structural description of a spec class's generation-relevant interface.
//!
//! A [`SpecModel`] captures exactly the parts of a spec that influence the
//! generated component: its kind, props, state, events, and lifecycle
//! delegates. Everything else about the source class (docs, bodies, private
//! helpers, declaration order) is deliberately absent, so two models compare
//! equal exactly when regeneration would be a no-op. That derived equality
//! is the comparison the generation service runs on every update.

mod identity;
mod model;

pub use identity::SpecIdentity;
pub use model::DelegateModel;
pub use model::EventModel;
pub use model::PropModel;
pub use model::SpecKind;
pub use model::SpecModel;
pub use model::StateModel;
