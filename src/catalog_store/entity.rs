//! [`ActorEntity`] implementation for [`Product`].

use super::search::SearchQuery;
use super::CatalogError;
use crate::model::{Product, ProductCreate};
use actor_store::ActorEntity;
use rust_decimal::Decimal;
use std::cmp::Ordering;

impl ActorEntity for Product {
    type Id = String;
    type Create = ProductCreate;
    type Filter = SearchQuery;
    type Error = CatalogError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidParameter(
                "name must not be blank".to_string(),
            ));
        }
        if params.price < Decimal::ZERO {
            return Err(CatalogError::InvalidParameter(format!(
                "price must not be negative, got {}",
                params.price
            )));
        }
        Ok(Product::new(id, name, params.description, params.price))
    }

    /// Listings are sorted by name.
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        a.name.cmp(&b.name)
    }

    fn matches(&self, filter: &SearchQuery) -> Option<u32> {
        filter.score(&self.name, &self.description)
    }
}
