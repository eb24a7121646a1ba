//! Pagination policy.
//!
//! Clients send an optional `(skip, take)` pair. The gateway only fills in missing
//! fields with zero; the cap is applied by the contract clients so every caller of a
//! store gets the same window.

use serde::Deserialize;

/// Page size used when `take` is zero, and the upper bound for any `take`.
pub const DEFAULT_PAGE_CAP: usize = 100;

/// Pagination exactly as the client sent it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationInput {
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

impl PaginationInput {
    pub fn new(skip: u64, take: u64) -> Self {
        Self {
            skip: Some(skip),
            take: Some(take),
        }
    }

    /// Missing fields become zero. No clamping happens here.
    pub fn page(self) -> Page {
        Page {
            skip: self.skip.unwrap_or(0),
            take: self.take.unwrap_or(0),
        }
    }
}

/// A `(skip, take)` window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub take: u64,
}

impl Page {
    pub fn new(skip: u64, take: u64) -> Self {
        Self { skip, take }
    }

    /// `take == 0` means "server default" and becomes `cap`; larger values are clamped.
    pub fn normalized(self, cap: usize) -> (usize, usize) {
        let cap = cap.max(1);
        let take = match usize::try_from(self.take) {
            Ok(0) => cap,
            Ok(take) => take.min(cap),
            Err(_) => cap,
        };
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        (skip, take)
    }
}
