//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type (Account, Product, Order, ...)
//! implements to be hosted by a [`ResourceActor`](crate::ResourceActor). It names the id,
//! creation payload, query filter and error types, and supplies the two pieces of
//! behaviour the generic store cannot guess: how records are ordered when listed, and
//! whether a record matches a query filter.
//!
//! # Provided Methods
//! - [`ActorEntity::listing_order`] defaults to "all equal", which leaves records in
//!   insertion order.
//! - [`ActorEntity::matches`] defaults to "never matches" for entities that are not queryable.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// Associated types keep every store strongly typed: a `Product` store only accepts a
/// `ProductCreate` payload and a `ProductFilter`, and the compiler rejects anything else.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug + 'static;

    /// Filter accepted by [`ResourceRequest::Query`](crate::ResourceRequest::Query).
    /// Use `()` if the entity is never queried.
    type Filter: Send + Sync + Debug + 'static;

    /// The error type returned when a payload is rejected.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per entity rather than one per request type. Clients deal with a
    /// single `CatalogError`, which keeps matching at call sites short.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated id and the payload.
    /// Validation failures are returned here and nothing is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Relative order of two records in `List` and `Query` results.
    fn listing_order(_a: &Self, _b: &Self) -> Ordering {
        Ordering::Equal
    }

    /// Relevance of this record for `filter`; `None` excludes it from results.
    /// Higher scores sort first.
    fn matches(&self, _filter: &Self::Filter) -> Option<u32> {
        None
    }
}
