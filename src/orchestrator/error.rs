//! Error types for the Order Orchestrator and the order store client.

use crate::catalog_store::CatalogError;
use crate::error::{DeadlineExceeded, ErrorKind};
use thiserror::Error;

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The account does not exist, or could not be confirmed to exist.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The order request is malformed.
    #[error("Order validation error: {0}")]
    InvalidParameter(String),

    /// The request deadline passed before the operation finished.
    #[error("Order request timed out")]
    Timeout,

    /// Persisting or reading orders failed.
    #[error("Order storage error: {0}")]
    StorageError(String),

    /// Resolving products from the catalog failed.
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AccountNotFound(_) => ErrorKind::NotFound,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::Timeout => ErrorKind::Timeout,
            Self::StorageError(_) => ErrorKind::StorageError,
            Self::Catalog(inner) => inner.kind(),
        }
    }
}

impl From<DeadlineExceeded> for OrderError {
    fn from(_: DeadlineExceeded) -> Self {
        OrderError::Timeout
    }
}
