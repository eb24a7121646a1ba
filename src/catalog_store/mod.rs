//! Catalog store: products with name-ordered listing and fuzzy search.

pub mod entity;
pub mod error;
pub mod search;

pub use error::*;
pub use search::SearchQuery;

use crate::clients::CatalogClient;
use crate::model::Product;
use actor_store::ResourceActor;
use ulid::Ulid;

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize, page_cap: usize) -> (ResourceActor<Product>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, || Ulid::new().to_string());
    let client = CatalogClient::new(generic_client, page_cap);

    (actor, client)
}
