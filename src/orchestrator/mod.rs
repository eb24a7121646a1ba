//! # Order Orchestrator
//!
//! Turns `{account, requested products}` into a persisted, priced [`Order`] and serves an
//! account's order history with current catalog data.
//!
//! [`OrderService`] is built from injected contracts and holds no per-request state, so
//! one instance serves any number of concurrent requests. Placement runs the stages in
//! [`pipeline`] strictly in order: account validation, catalog resolution, pricing,
//! persistence. Nothing is retried.

pub mod enrich;
pub mod error;
pub mod pipeline;

pub use enrich::EnrichmentPolicy;
pub use error::*;
pub use pipeline::OrderRequest;

use crate::context::RequestContext;
use crate::contracts::{AccountContract, CatalogContract, OrderContract, OrderStore};
use crate::model::{Order, RequestedProduct};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct OrderService {
    accounts: Arc<dyn AccountContract>,
    catalog: Arc<dyn CatalogContract>,
    store: Arc<dyn OrderStore>,
    enrichment: EnrichmentPolicy,
}

impl OrderService {
    pub fn new(
        accounts: Arc<dyn AccountContract>,
        catalog: Arc<dyn CatalogContract>,
        store: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            accounts,
            catalog,
            store,
            enrichment: EnrichmentPolicy::default(),
        }
    }
}

#[async_trait]
impl OrderContract for OrderService {
    #[instrument(skip(self, ctx, requested), fields(request_id = %ctx.request_id(), lines = requested.len()))]
    async fn place_order(
        &self,
        ctx: &RequestContext,
        account_id: &str,
        requested: Vec<RequestedProduct>,
    ) -> Result<Order, OrderError> {
        debug!(?requested, "place_order called");
        OrderRequest::new(account_id, requested)
            .validate_account(ctx, self.accounts.as_ref())
            .await?
            .resolve_catalog(ctx, self.catalog.as_ref())
            .await?
            .price()?
            .persist(ctx, self.store.as_ref())
            .await
    }

    /// Reads the account's orders and refreshes their line items with one batched
    /// catalog lookup. A failed lookup fails the whole read.
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn orders_for_account(
        &self,
        ctx: &RequestContext,
        account_id: &str,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.store.list_for_account(ctx, account_id).await?;
        let ids = enrich::referenced_product_ids(&orders);
        if ids.is_empty() {
            debug!(orders = orders.len(), "Nothing to enrich");
            return Ok(orders);
        }

        let products = self.catalog.products_by_ids(ctx, ids).await?;
        self.enrichment.apply(&mut orders, &products);
        info!(orders = orders.len(), products = products.len(), "Orders enriched");
        Ok(orders)
    }
}
