//! Query resolvers.

use super::lookup::{AccountLookup, ProductLookup};
use super::schema::{AccountArgs, ProductArgs};
use super::{Gateway, GatewayError};
use crate::model::{Account, Order, Product};
use tracing::{debug, instrument, warn};

impl Gateway {
    /// `accounts(id?, pagination?)`: a point lookup or a page of accounts.
    #[instrument(skip(self))]
    pub async fn accounts(&self, args: AccountArgs) -> Result<Vec<Account>, GatewayError> {
        let ctx = self.context();
        let lookup = AccountLookup::from_args(args);
        debug!(request_id = %ctx.request_id(), ?lookup, "Resolving accounts");

        let result = match lookup {
            AccountLookup::ById(id) => self
                .accounts
                .get_account(&ctx, &id)
                .await
                .map(|account| vec![account]),
            AccountLookup::List(page) => self.accounts.list_accounts(&ctx, page).await,
        };
        result.map_err(|e| {
            warn!(request_id = %ctx.request_id(), error = %e, "accounts failed");
            e.into()
        })
    }

    /// `products(id?, query?, ids?, pagination?)`.
    #[instrument(skip(self))]
    pub async fn products(&self, args: ProductArgs) -> Result<Vec<Product>, GatewayError> {
        let ctx = self.context();
        let lookup = ProductLookup::from_args(args);
        debug!(request_id = %ctx.request_id(), mode = lookup.mode(), "Resolving products");

        let result = match lookup {
            ProductLookup::ById(id) => self
                .catalog
                .get_product(&ctx, &id)
                .await
                .map(|product| vec![product]),
            ProductLookup::Search { query, page } => {
                self.catalog.search_products(&ctx, &query, page).await
            }
            ProductLookup::ByIds(ids) => self.catalog.products_by_ids(&ctx, ids).await,
            ProductLookup::List(page) => self.catalog.list_products(&ctx, page).await,
        };
        result.map_err(|e| {
            warn!(request_id = %ctx.request_id(), error = %e, "products failed");
            e.into()
        })
    }

    /// The nested `orders` field of an account.
    #[instrument(skip(self))]
    pub async fn account_orders(&self, account_id: &str) -> Result<Vec<Order>, GatewayError> {
        let ctx = self.context();
        self.orders
            .orders_for_account(&ctx, account_id)
            .await
            .map_err(|e| {
                warn!(request_id = %ctx.request_id(), error = %e, "orders failed");
                e.into()
            })
    }
}
