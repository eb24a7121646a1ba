//! The order placement pipeline.
//!
//! Placing an order is a fixed sequence of stages. Each stage consumes the value
//! produced by the previous one, so a later stage cannot run unless every earlier stage
//! returned `Ok`:
//!
//! ```text
//! OrderRequest ──validate_account──▶ AccountStage ──resolve_catalog──▶ CatalogStage
//!      ──price──▶ PricedOrder ──persist──▶ Order
//! ```
//!
//! Nothing is written before `persist`, so any failure earlier leaves no trace.

use super::OrderError;
use crate::account_store::AccountError;
use crate::context::RequestContext;
use crate::contracts::{AccountContract, CatalogContract, OrderStore};
use crate::model::{Account, Order, OrderedProduct, Product, RequestedProduct};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};
use ulid::Ulid;

/// An order as requested by a client: an account and the wanted quantities.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub account_id: String,
    pub requested: Vec<RequestedProduct>,
}

/// The account is known to exist.
#[derive(Debug)]
pub struct AccountStage {
    account: Account,
    requested: Vec<RequestedProduct>,
}

/// Line items resolved against the catalog.
#[derive(Debug)]
pub struct CatalogStage {
    account_id: String,
    lines: Vec<OrderedProduct>,
}

/// A complete order, not yet stored.
#[derive(Debug)]
pub struct PricedOrder {
    order: Order,
}

impl OrderRequest {
    pub fn new(account_id: impl Into<String>, requested: Vec<RequestedProduct>) -> Self {
        Self {
            account_id: account_id.into(),
            requested,
        }
    }

    /// Confirms the account exists. Any failure other than the deadline is reported as
    /// `AccountNotFound`.
    #[instrument(name = "validate_account", skip_all, fields(account_id = %self.account_id))]
    pub async fn validate_account(
        self,
        ctx: &RequestContext,
        accounts: &dyn AccountContract,
    ) -> Result<AccountStage, OrderError> {
        match accounts.get_account(ctx, &self.account_id).await {
            Ok(account) => {
                debug!("Account confirmed");
                Ok(AccountStage {
                    account,
                    requested: self.requested,
                })
            }
            Err(AccountError::Timeout) => Err(OrderError::Timeout),
            Err(e) => {
                warn!(error = %e, "Account validation failed");
                Err(OrderError::AccountNotFound(self.account_id))
            }
        }
    }
}

impl AccountStage {
    /// Fetches the requested products in one bulk lookup and builds line items.
    ///
    /// Products the catalog does not return are dropped, as are zero quantities. When
    /// a product id is requested more than once the first request wins.
    #[instrument(name = "resolve_catalog", skip_all, fields(account_id = %self.account.id))]
    pub async fn resolve_catalog(
        self,
        ctx: &RequestContext,
        catalog: &dyn CatalogContract,
    ) -> Result<CatalogStage, OrderError> {
        let ids = distinct_ids(&self.requested);
        // An empty id list would mean "whole catalog".
        let products = if ids.is_empty() {
            Vec::new()
        } else {
            catalog.products_by_ids(ctx, ids).await?
        };
        let lines = match_lines(&products, &self.requested);
        debug!(
            requested = self.requested.len(),
            found = products.len(),
            lines = lines.len(),
            "Catalog resolved"
        );
        Ok(CatalogStage {
            account_id: self.account.id,
            lines,
        })
    }
}

impl CatalogStage {
    /// Computes the total and stamps a fresh id and creation time. A total too large
    /// for a `Decimal` rejects the order.
    pub fn price(self) -> Result<PricedOrder, OrderError> {
        self.price_at(Ulid::new().to_string(), Utc::now())
    }

    fn price_at(self, id: String, created_at: DateTime<Utc>) -> Result<PricedOrder, OrderError> {
        let Some(total_price) = total(&self.lines) else {
            warn!(account_id = %self.account_id, lines = self.lines.len(), "Order total overflows");
            return Err(OrderError::InvalidParameter(
                "order total exceeds the supported range".to_string(),
            ));
        };
        Ok(PricedOrder {
            order: Order {
                id,
                account_id: self.account_id,
                created_at,
                total_price,
                products: self.lines,
            },
        })
    }
}

impl PricedOrder {
    /// Stores the order. The order is placed only if the store accepts it.
    #[instrument(name = "persist", skip_all, fields(order_id = %self.order.id))]
    pub async fn persist(
        self,
        ctx: &RequestContext,
        store: &dyn OrderStore,
    ) -> Result<Order, OrderError> {
        ctx.ensure_live()?;
        store.put(ctx, self.order.clone()).await?;
        info!(
            account_id = %self.order.account_id,
            total = %self.order.total_price,
            lines = self.order.products.len(),
            "Order placed"
        );
        Ok(self.order)
    }
}

/// Requested product ids without repeats, in request order.
fn distinct_ids(requested: &[RequestedProduct]) -> Vec<String> {
    let mut seen = HashSet::new();
    requested
        .iter()
        .filter(|r| seen.insert(r.product_id.as_str()))
        .map(|r| r.product_id.clone())
        .collect()
}

/// One line per catalog product that was requested with a positive quantity, in
/// catalog order.
fn match_lines(products: &[Product], requested: &[RequestedProduct]) -> Vec<OrderedProduct> {
    products
        .iter()
        .filter_map(|product| {
            let wanted = requested.iter().find(|r| r.product_id == product.id)?;
            (wanted.quantity > 0).then(|| OrderedProduct {
                id: product.id.clone(),
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price,
                quantity: wanted.quantity,
            })
        })
        .collect()
}

/// Exact sum of the line totals; `None` on overflow.
fn total(lines: &[OrderedProduct]) -> Option<Decimal> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.line_total()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: Decimal) -> Product {
        Product::new(id, format!("name {id}"), format!("about {id}"), price)
    }

    #[test]
    fn distinct_ids_keep_first_occurrence() {
        let requested = vec![
            RequestedProduct::new("p2", 1),
            RequestedProduct::new("p1", 1),
            RequestedProduct::new("p2", 5),
        ];
        assert_eq!(distinct_ids(&requested), vec!["p2", "p1"]);
    }

    #[test]
    fn zero_quantities_and_unknown_products_are_dropped() {
        let products = vec![
            product("p1", Decimal::new(100, 1)),
            product("p2", Decimal::new(50, 1)),
        ];
        let requested = vec![
            RequestedProduct::new("p1", 2),
            RequestedProduct::new("p2", 0),
            RequestedProduct::new("p3", 4),
        ];
        let lines = match_lines(&products, &requested);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "p1");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].name, "name p1");
        assert_eq!(total(&lines), Some(Decimal::new(200, 1)));
    }

    #[test]
    fn first_duplicate_request_wins() {
        let products = vec![product("p1", Decimal::ONE)];
        let requested = vec![RequestedProduct::new("p1", 3), RequestedProduct::new("p1", 9)];
        let lines = match_lines(&products, &requested);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
    }

    #[test]
    fn total_is_exact_decimal_sum() {
        let lines = match_lines(
            &[
                product("a", Decimal::new(10, 2)),
                product("b", Decimal::new(20, 2)),
            ],
            &[RequestedProduct::new("a", 3), RequestedProduct::new("b", 1)],
        );
        // 0.10 * 3 + 0.20 is exactly 0.50, no float drift.
        assert_eq!(total(&lines), Some(Decimal::new(50, 2)));
    }

    #[test]
    fn price_stamps_order_fields() {
        let stage = CatalogStage {
            account_id: "a1".into(),
            lines: match_lines(
                &[product("p1", Decimal::new(25, 0))],
                &[RequestedProduct::new("p1", 2)],
            ),
        };
        let now = Utc::now();
        let priced = stage.price_at("o1".into(), now).unwrap();
        let order = &priced.order;
        assert_eq!(order.id, "o1");
        assert_eq!(order.account_id, "a1");
        assert_eq!(order.created_at, now);
        assert_eq!(order.total_price, Decimal::new(50, 0));
    }

    #[test]
    fn overflowing_line_is_rejected() {
        let stage = CatalogStage {
            account_id: "a1".into(),
            lines: match_lines(
                &[product("p1", Decimal::MAX)],
                &[RequestedProduct::new("p1", 2)],
            ),
        };
        let err = stage.price_at("o1".into(), Utc::now()).unwrap_err();
        assert!(matches!(err, OrderError::InvalidParameter(_)));
    }

    #[test]
    fn overflowing_sum_is_none() {
        let lines = match_lines(
            &[product("a", Decimal::MAX), product("b", Decimal::MAX)],
            &[RequestedProduct::new("a", 1), RequestedProduct::new("b", 1)],
        );
        assert_eq!(lines[0].line_total(), Some(Decimal::MAX));
        assert_eq!(total(&lines), None);
    }
}
