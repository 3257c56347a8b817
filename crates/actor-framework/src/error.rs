//! # Framework Errors
//!
//! Failures raised by the plumbing itself, as opposed to entity business rules.
//! Entity errors travel inside [`FrameworkError::EntityError`] so clients can
//! surface the entity's own message.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity's own error.
    pub fn entity<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(e))
    }
}
