//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders arrive fully built (id, timestamp, total and line items) and are stored with
//! `Insert`, so a persisted order is always complete.

use crate::model::Order;
use actor_store::ActorEntity;
use std::cmp::Ordering;
use std::convert::Infallible;

/// Query filter selecting one account's orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForAccount(pub String);

impl ActorEntity for Order {
    type Id = String;
    /// A complete order whose id is replaced by the store's generator.
    type Create = Order;
    type Filter = ForAccount;
    type Error = Infallible;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: Order) -> Result<Self, Self::Error> {
        Ok(Order { id, ..params })
    }

    /// Oldest first.
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        a.created_at.cmp(&b.created_at)
    }

    fn matches(&self, filter: &ForAccount) -> Option<u32> {
        (self.account_id == filter.0).then_some(0)
    }
}
