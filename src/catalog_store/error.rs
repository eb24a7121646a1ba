//! Error types for the Catalog store.

use crate::error::{DeadlineExceeded, ErrorKind};
use thiserror::Error;

/// Errors that can occur during product and catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    InvalidParameter(String),

    /// The request deadline passed before the store answered.
    #[error("Catalog request timed out")]
    Timeout,

    /// The store rejected a write.
    #[error("Catalog storage error: {0}")]
    StorageError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Catalog store unavailable: {0}")]
    DownstreamUnavailable(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::Timeout => ErrorKind::Timeout,
            Self::StorageError(_) => ErrorKind::StorageError,
            Self::DownstreamUnavailable(_) => ErrorKind::DownstreamUnavailable,
        }
    }
}

impl From<DeadlineExceeded> for CatalogError {
    fn from(_: DeadlineExceeded) -> Self {
        CatalogError::Timeout
    }
}
