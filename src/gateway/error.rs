//! Error type reported by gateway resolvers.

use crate::account_store::AccountError;
use crate::catalog_store::CatalogError;
use crate::error::{DeadlineExceeded, ErrorKind};
use crate::orchestrator::OrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// Input rejected before any downstream call.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("request timed out")]
    Timeout,

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::Timeout => ErrorKind::Timeout,
            Self::Account(e) => e.kind(),
            Self::Catalog(e) => e.kind(),
            Self::Order(e) => e.kind(),
        }
    }
}

impl From<DeadlineExceeded> for GatewayError {
    fn from(_: DeadlineExceeded) -> Self {
        GatewayError::Timeout
    }
}
