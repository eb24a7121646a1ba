use crate::account_store::AccountError;
use crate::context::RequestContext;
use crate::contracts::AccountContract;
use crate::model::{Account, AccountCreate};
use crate::paging::Page;
use actor_store::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
    page_cap: usize,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>, page_cap: usize) -> Self {
        Self { inner, page_cap }
    }

    fn map_error(e: FrameworkError) -> AccountError {
        match e {
            FrameworkError::EntityError(source) => match source.downcast::<AccountError>() {
                Ok(err) => *err,
                Err(other) => AccountError::InvalidParameter(other.to_string()),
            },
            FrameworkError::Conflict(id) => AccountError::StorageError(format!("duplicate id {id}")),
            other => AccountError::DownstreamUnavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl AccountContract for AccountClient {
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn create_account(
        &self,
        ctx: &RequestContext,
        name: String,
    ) -> Result<Account, AccountError> {
        debug!("Sending request");
        ctx.bound(self.inner.create(AccountCreate { name }))
            .await?
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn get_account(&self, ctx: &RequestContext, id: &str) -> Result<Account, AccountError> {
        debug!("Sending request");
        ctx.bound(self.inner.get(id.to_string()))
            .await?
            .map_err(Self::map_error)?
            .ok_or_else(|| AccountError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn list_accounts(
        &self,
        ctx: &RequestContext,
        page: Page,
    ) -> Result<Vec<Account>, AccountError> {
        let (skip, take) = page.normalized(self.page_cap);
        debug!(skip, take, "Sending request");
        ctx.bound(self.inner.list(skip, take))
            .await?
            .map_err(Self::map_error)
    }
}
