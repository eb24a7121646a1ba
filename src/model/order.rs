use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A placed order.
///
/// `total_price` is computed once by the orchestrator from the line items and is never
/// recomputed, even when line items are refreshed from the catalog on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub account_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub products: Vec<OrderedProduct>,
}

impl Order {
    /// Product ids of every line item, in line order.
    pub fn product_ids(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.id.as_str())
    }
}

/// A line item: a product snapshot plus the requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderedProduct {
    /// `price * quantity`, or `None` if it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// One requested `(product id, quantity)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestedProduct {
    pub product_id: String,
    pub quantity: u32,
}

impl RequestedProduct {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}
