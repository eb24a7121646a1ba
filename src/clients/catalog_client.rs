use crate::catalog_store::{CatalogError, SearchQuery};
use crate::context::RequestContext;
use crate::contracts::CatalogContract;
use crate::model::{Product, ProductCreate};
use crate::paging::Page;
use actor_store::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
    page_cap: usize,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>, page_cap: usize) -> Self {
        Self { inner, page_cap }
    }

    fn map_error(e: FrameworkError) -> CatalogError {
        match e {
            FrameworkError::EntityError(source) => match source.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::InvalidParameter(other.to_string()),
            },
            FrameworkError::Conflict(id) => CatalogError::StorageError(format!("duplicate id {id}")),
            other => CatalogError::DownstreamUnavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl CatalogContract for CatalogClient {
    #[instrument(skip(self, ctx, params), fields(request_id = %ctx.request_id()))]
    async fn create_product(
        &self,
        ctx: &RequestContext,
        params: ProductCreate,
    ) -> Result<Product, CatalogError> {
        debug!(?params, "Sending request");
        ctx.bound(self.inner.create(params))
            .await?
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn get_product(&self, ctx: &RequestContext, id: &str) -> Result<Product, CatalogError> {
        debug!("Sending request");
        ctx.bound(self.inner.get(id.to_string()))
            .await?
            .map_err(Self::map_error)?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn list_products(
        &self,
        ctx: &RequestContext,
        page: Page,
    ) -> Result<Vec<Product>, CatalogError> {
        let (skip, take) = page.normalized(self.page_cap);
        debug!(skip, take, "Sending request");
        ctx.bound(self.inner.list(skip, take))
            .await?
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, ctx, ids), fields(request_id = %ctx.request_id(), ids = ids.len()))]
    async fn products_by_ids(
        &self,
        ctx: &RequestContext,
        ids: Vec<String>,
    ) -> Result<Vec<Product>, CatalogError> {
        debug!(?ids, "Sending request");
        ctx.bound(self.inner.get_many(ids))
            .await?
            .map_err(Self::map_error)
    }

    /// A query without any searchable term lists the catalog instead.
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    async fn search_products(
        &self,
        ctx: &RequestContext,
        query: &str,
        page: Page,
    ) -> Result<Vec<Product>, CatalogError> {
        let filter = SearchQuery::new(query);
        if filter.is_empty() {
            return self.list_products(ctx, page).await;
        }
        let (skip, take) = page.normalized(self.page_cap);
        debug!(skip, take, "Sending request");
        ctx.bound(self.inner.query(filter, skip, take))
            .await?
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_store::mock::{Call, MockClient};
    use rust_decimal::Decimal;
    use std::time::Duration;

    fn ctx() -> RequestContext {
        RequestContext::with_timeout(Duration::from_secs(1))
    }

    #[tokio::test]
    async fn search_sends_parsed_terms_with_capped_page() {
        let mock = MockClient::<Product>::new();
        mock.expect_query().return_ok(vec![Product::new(
            "p1",
            "Lamp",
            "",
            Decimal::ONE,
        )]);
        let client = CatalogClient::new(mock.client(), 50);

        let found = client
            .search_products(&ctx(), "Desk LAMP", Page::new(2, 0))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let calls = mock.take_calls();
        match &calls[0] {
            Call::Query { filter, skip, take } => {
                assert_eq!(filter.terms(), ["desk", "lamp"]);
                assert_eq!((*skip, *take), (2, 50));
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_search_lists_instead() {
        let mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(vec![]);
        let client = CatalogClient::new(mock.client(), 100);

        client
            .search_products(&ctx(), "  ", Page::default())
            .await
            .unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let mock = MockClient::<Product>::new();
        mock.expect_get().return_ok(None);
        let client = CatalogClient::new(mock.client(), 100);

        let err = client.get_product(&ctx(), "p9").await.unwrap_err();
        assert_eq!(err, CatalogError::NotFound("p9".into()));
    }

    #[tokio::test]
    async fn dropped_reply_is_downstream_unavailable() {
        // No expectation queued: the mock drops the reply channel.
        let mock = MockClient::<Product>::new();
        let client = CatalogClient::new(mock.client(), 100);

        let err = client
            .products_by_ids(&ctx(), vec!["p1".into()])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::DownstreamUnavailable);
    }
}
