//! Inputs and arguments accepted by the gateway's root fields.
//!
//! Field names follow the client-facing schema (`accountId`, `skip`, `take`), so these
//! types deserialize straight from a JSON variables object.

use super::GatewayError;
use crate::model::{ProductCreate, RequestedProduct};
use crate::paging::PaginationInput;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AccountInput {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<ProductInput> for ProductCreate {
    fn from(input: ProductInput) -> Self {
        ProductCreate {
            name: input.name,
            description: input.description,
            price: input.price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub account_id: String,
    pub products: Vec<OrderProductInput>,
}

/// A requested line. `quantity` is signed because clients can send any integer.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderProductInput {
    pub id: String,
    pub quantity: i32,
}

impl OrderInput {
    /// Every quantity must be positive. One bad line rejects the whole input.
    pub fn requested_products(&self) -> Result<Vec<RequestedProduct>, GatewayError> {
        self.products
            .iter()
            .map(|line| match u32::try_from(line.quantity) {
                Ok(quantity) if quantity > 0 => Ok(RequestedProduct::new(&line.id, quantity)),
                _ => Err(GatewayError::InvalidParameter(format!(
                    "quantity for product {} must be positive, got {}",
                    line.id, line.quantity
                ))),
            })
            .collect()
    }
}

/// Arguments of the `accounts` query field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountArgs {
    pub id: Option<String>,
    pub pagination: Option<PaginationInput>,
}

/// Arguments of the `products` query field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductArgs {
    pub id: Option<String>,
    pub query: Option<String>,
    pub ids: Option<Vec<String>>,
    pub pagination: Option<PaginationInput>,
}
