//! The narrow request/response contracts the core consumes and exposes.
//!
//! Every method takes the caller's [`RequestContext`]; implementations bound their
//! downstream work by its deadline. All traits are object safe and are passed around as
//! `Arc<dyn ...>` so the orchestrator and gateway can be built over real store clients
//! or test doubles alike.

use crate::account_store::AccountError;
use crate::catalog_store::CatalogError;
use crate::context::RequestContext;
use crate::model::{Account, Order, Product, ProductCreate, RequestedProduct};
use crate::orchestrator::OrderError;
use crate::paging::Page;
use async_trait::async_trait;

#[async_trait]
pub trait AccountContract: Send + Sync {
    async fn create_account(&self, ctx: &RequestContext, name: String)
        -> Result<Account, AccountError>;

    /// `NotFound` when no account has this id.
    async fn get_account(&self, ctx: &RequestContext, id: &str) -> Result<Account, AccountError>;

    /// `page` is normalized against the server-side cap by the implementation.
    async fn list_accounts(&self, ctx: &RequestContext, page: Page)
        -> Result<Vec<Account>, AccountError>;
}

#[async_trait]
pub trait CatalogContract: Send + Sync {
    async fn create_product(
        &self,
        ctx: &RequestContext,
        params: ProductCreate,
    ) -> Result<Product, CatalogError>;

    async fn get_product(&self, ctx: &RequestContext, id: &str) -> Result<Product, CatalogError>;

    async fn list_products(&self, ctx: &RequestContext, page: Page)
        -> Result<Vec<Product>, CatalogError>;

    /// Bulk lookup in request order; unknown ids are skipped.
    ///
    /// An empty `ids` means "no id constraint" and returns the whole catalog. Callers
    /// that mean "these products" must not pass an empty list.
    async fn products_by_ids(
        &self,
        ctx: &RequestContext,
        ids: Vec<String>,
    ) -> Result<Vec<Product>, CatalogError>;

    async fn search_products(
        &self,
        ctx: &RequestContext,
        query: &str,
        page: Page,
    ) -> Result<Vec<Product>, CatalogError>;
}

/// Persistence for orders. Only the orchestrator writes here.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Stores a complete order. Either the whole order is stored or nothing is.
    async fn put(&self, ctx: &RequestContext, order: Order) -> Result<(), OrderError>;

    /// Orders for `account_id`, oldest first.
    async fn list_for_account(
        &self,
        ctx: &RequestContext,
        account_id: &str,
    ) -> Result<Vec<Order>, OrderError>;
}

/// The orchestrator's surface, consumed by the gateway.
#[async_trait]
pub trait OrderContract: Send + Sync {
    async fn place_order(
        &self,
        ctx: &RequestContext,
        account_id: &str,
        requested: Vec<RequestedProduct>,
    ) -> Result<Order, OrderError>;

    async fn orders_for_account(
        &self,
        ctx: &RequestContext,
        account_id: &str,
    ) -> Result<Vec<Order>, OrderError>;
}
