//! # Store Errors
//!
//! Errors raised by the store runtime itself, independent of the entity hosted.
//! Domain clients translate these into their own error enums.

/// Errors that can occur within the store runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item already exists: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
