use specsync_extract::ModelComputationError;
use specsync_generate::GenerationError;
use thiserror::Error;

/// Failure modes of a synchronous component update.
///
/// Both variants are per-call. The cache keeps whatever pair was last
/// committed, and a later update of the same spec may succeed.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Model(#[from] ModelComputationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
