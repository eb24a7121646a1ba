//! Error types for the Account store.

use crate::error::{DeadlineExceeded, ErrorKind};
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// The requested account was not found.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// The account data provided is invalid.
    #[error("Account validation error: {0}")]
    InvalidParameter(String),

    /// The request deadline passed before the store answered.
    #[error("Account request timed out")]
    Timeout,

    /// The store rejected a write.
    #[error("Account storage error: {0}")]
    StorageError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Account store unavailable: {0}")]
    DownstreamUnavailable(String),
}

impl AccountError {
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

impl From<DeadlineExceeded> for AccountError {
    fn from(_: DeadlineExceeded) -> Self {
        AccountError::Timeout
    }
}
