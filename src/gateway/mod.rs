//! # Federation Gateway
//!
//! One query/mutation surface over the Account contract, the Catalog contract and the
//! Order Orchestrator.
//!
//! - Every resolver builds its own [`RequestContext`] with the configured timeout and
//!   passes it to every downstream call it makes.
//! - Optional lookup arguments become one tagged request ([`lookup`]) before anything
//!   is called.
//! - `createOrder` input is validated up front; a bad line means no downstream call.
//! - [`Gateway::execute`] runs a whole [`GraphRequest`] with field-level error
//!   isolation ([`graph`]).

pub mod error;
pub mod graph;
pub mod lookup;
pub mod mutation;
pub mod query;
pub mod schema;

pub use error::*;
pub use graph::{GraphRequest, GraphResponse, MutationField, QueryField};
pub use lookup::{AccountLookup, ProductLookup};
pub use schema::*;

use crate::context::RequestContext;
use crate::contracts::{AccountContract, CatalogContract, OrderContract};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct Gateway {
    accounts: Arc<dyn AccountContract>,
    catalog: Arc<dyn CatalogContract>,
    orders: Arc<dyn OrderContract>,
    request_timeout: Duration,
}

impl Gateway {
    pub fn new(
        accounts: Arc<dyn AccountContract>,
        catalog: Arc<dyn CatalogContract>,
        orders: Arc<dyn OrderContract>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            accounts,
            catalog,
            orders,
            request_timeout,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn context(&self) -> RequestContext {
        RequestContext::with_timeout(self.request_timeout)
    }
}
