//! Contract implementations over the store actors.
//!
//! Each client wraps a [`ResourceClient`](actor_store::ResourceClient), bounds every call
//! by the caller's deadline, applies the pagination cap, and maps
//! [`FrameworkError`](actor_store::FrameworkError) into its domain error.

pub mod account_client;
pub mod catalog_client;
pub mod order_store_client;

pub use account_client::*;
pub use catalog_client::*;
pub use order_store_client::*;
