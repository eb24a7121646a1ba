//! Order store: append-only persistence of whole orders.

pub mod entity;

pub use entity::ForAccount;

use crate::clients::OrderStoreClient;
use crate::model::Order;
use actor_store::ResourceActor;
use ulid::Ulid;

/// Creates a new Order store actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderStoreClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, || Ulid::new().to_string());
    let client = OrderStoreClient::new(generic_client);

    (actor, client)
}
