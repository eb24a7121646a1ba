//! Mutation resolvers.

use super::schema::{AccountInput, OrderInput, ProductInput};
use super::{Gateway, GatewayError};
use crate::model::{Account, Order, Product};
use tracing::{info, instrument, warn};

impl Gateway {
    #[instrument(skip(self))]
    pub async fn create_account(&self, input: AccountInput) -> Result<Account, GatewayError> {
        let ctx = self.context();
        let account = self
            .accounts
            .create_account(&ctx, input.name)
            .await
            .inspect_err(|e| warn!(request_id = %ctx.request_id(), error = %e, "createAccount failed"))?;
        info!(request_id = %ctx.request_id(), account_id = %account.id, "Account created");
        Ok(account)
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, input: ProductInput) -> Result<Product, GatewayError> {
        let ctx = self.context();
        let product = self
            .catalog
            .create_product(&ctx, input.into())
            .await
            .inspect_err(|e| warn!(request_id = %ctx.request_id(), error = %e, "createProduct failed"))?;
        info!(request_id = %ctx.request_id(), product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Quantities are validated before anything is sent downstream.
    #[instrument(skip(self))]
    pub async fn create_order(&self, input: OrderInput) -> Result<Order, GatewayError> {
        let requested = input.requested_products()?;
        let ctx = self.context();
        let order = self
            .orders
            .place_order(&ctx, &input.account_id, requested)
            .await
            .inspect_err(|e| warn!(request_id = %ctx.request_id(), error = %e, "createOrder failed"))?;
        Ok(order)
    }
}
