//! Account store: `{id, name}` identities hosted by a [`ResourceActor`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AccountClient;
use crate::model::Account;
use actor_store::ResourceActor;
use ulid::Ulid;

/// Creates a new Account actor and its client.
///
/// Ids are ULIDs. Listing follows insertion order.
pub fn new(buffer_size: usize, page_cap: usize) -> (ResourceActor<Account>, AccountClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, || Ulid::new().to_string());
    let client = AccountClient::new(generic_client, page_cap);

    (actor, client)
}
