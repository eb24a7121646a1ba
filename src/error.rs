//! Error kinds shared by every component.
//!
//! Each component has its own `thiserror` enum (`AccountError`, `CatalogError`,
//! `OrderError`, `GatewayError`). They all classify into one [`ErrorKind`], which is what
//! the gateway reports to clients.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Account or product absent.
    NotFound,
    /// Rejected input, e.g. a non-positive quantity or a blank name.
    InvalidParameter,
    /// The request deadline passed before downstream calls completed.
    Timeout,
    /// Persistence or read failure in a store.
    StorageError,
    /// A contract call failed below the application layer.
    DownstreamUnavailable,
}

impl ErrorKind {
    /// Code rendered in `errors[].extensions.code`.
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::Timeout => "TIMEOUT",
            Self::StorageError => "STORAGE_ERROR",
            Self::DownstreamUnavailable => "DOWNSTREAM_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Deadline expiry, produced by [`RequestContext`](crate::context::RequestContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Deadline exceeded")]
pub struct DeadlineExceeded;
