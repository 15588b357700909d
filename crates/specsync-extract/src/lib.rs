//! Structural spec model extraction from class declaration snapshots.
//!
//! This crate provides a pure API for turning a host's [`ClassDecl`] into a
//! comparison-ready [`SpecModel`]. It does NOT:
//! - Parse source text (the host's syntax tree does that)
//! - Cache anything (the generation service owns caching)
//! - Generate components (the generator crate owns that)
//!
//! Extraction is where incidental detail dies: docs, method bodies, fields,
//! private helpers, unknown annotations, and declaration order all stop here
//! and never reach the model. Whatever survives is exactly what component
//! generation depends on, which is what makes model equality the right
//! regeneration check.

mod error;
mod extractors;
pub mod vocabulary;

use specsync_model::SpecIdentity;
use specsync_model::SpecModel;
use specsync_syntax::ClassDecl;

pub use error::ModelComputationError;

/// Derive the stable identity of a spec class snapshot.
///
/// Identity is the qualified name alone, so reparsed snapshots of the same
/// class resolve to the same cache key.
pub fn spec_identity(class: &ClassDecl) -> Result<SpecIdentity, ModelComputationError> {
    extractors::identity(class)
}

/// Extract the structural model of a spec class.
///
/// This is a pure function: one class snapshot in, one canonical model out.
/// Two snapshots that differ only in incidental detail produce equal models.
pub fn extract_spec_model(class: &ClassDecl) -> Result<SpecModel, ModelComputationError> {
    let identity = extractors::identity(class)?;
    let kind = extractors::spec_kind(class)?;
    let component_name = extractors::component_name(&identity)?;
    let props = extractors::props(class)?;
    let states = extractors::states(class)?;
    let events = extractors::events(class)?;
    let delegates = extractors::delegates(class, kind)?;

    tracing::debug!(
        "Extracted {} spec model for {}: {} props, {} states, {} events, {} delegates",
        kind,
        identity,
        props.len(),
        states.len(),
        events.len(),
        delegates.len()
    );

    Ok(SpecModel {
        identity,
        kind,
        component_name,
        props,
        states,
        events,
        delegates,
    })
}
