use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product. The catalog is the source of truth for `price` when an order is
/// placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the catalog store)
    /// * `name` - Product name
    /// * `description` - Free text, searched alongside the name
    /// * `price` - Unit price
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}
