//! Plain data shared by the stores, the orchestrator and the gateway.
//!
//! Each type here is also the record type of one store actor; see the
//! `ActorEntity` impls in [`crate::account_store`], [`crate::catalog_store`] and
//! [`crate::order_store`].

pub mod account;
pub mod order;
pub mod product;

pub use account::*;
pub use order::*;
pub use product::*;
