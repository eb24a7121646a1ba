use crate::context::RequestContext;
use crate::contracts::OrderStore;
use crate::model::Order;
use crate::order_store::ForAccount;
use crate::orchestrator::OrderError;
use actor_store::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order store actor.
#[derive(Clone)]
pub struct OrderStoreClient {
    inner: ResourceClient<Order>,
}

impl OrderStoreClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    fn map_error(e: FrameworkError) -> OrderError {
        OrderError::StorageError(e.to_string())
    }
}

#[async_trait]
impl OrderStore for OrderStoreClient {
    /// Checks the deadline once, then waits for the store's answer. A sent order is
    /// applied by the store actor in one step, so the outcome reported here is the
    /// outcome that was stored.
    #[instrument(skip(self, ctx, order), fields(request_id = %ctx.request_id(), order_id = %order.id))]
    async fn put(&self, ctx: &RequestContext, order: Order) -> Result<(), OrderError> {
        ctx.ensure_live()?;
        debug!(?order, "Sending request");
        let id = self.inner.insert(order).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order stored");
        Ok(())
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn list_for_account(
        &self,
        ctx: &RequestContext,
        account_id: &str,
    ) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        ctx.bound(
            self.inner
                .query(ForAccount(account_id.to_string()), 0, usize::MAX),
        )
        .await?
        .map_err(Self::map_error)
    }
}
