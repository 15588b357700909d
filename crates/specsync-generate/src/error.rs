use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Cannot generate a component from this model: {message}")]
    UnsupportedModel { message: String },

    #[error("Generated members collide on the name `{name}`")]
    MemberConflict { name: String },
}
