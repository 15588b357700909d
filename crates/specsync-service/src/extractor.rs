use specsync_extract::ModelComputationError;
use specsync_model::SpecModel;
use specsync_syntax::ClassDecl;

/// Computes structural models for the service.
///
/// Implementations must be pure functions of the snapshot and must keep the
/// model keyed on the snapshot's own identity; the service compares and
/// caches under that identity.
pub trait SpecModelExtractor: Send + Sync {
    fn extract(&self, class: &ClassDecl) -> Result<SpecModel, ModelComputationError>;
}

/// Default extractor backed by [`specsync_extract::extract_spec_model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralExtractor;

impl SpecModelExtractor for StructuralExtractor {
    fn extract(&self, class: &ClassDecl) -> Result<SpecModel, ModelComputationError> {
        specsync_extract::extract_spec_model(class)
    }
}
