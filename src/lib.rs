//! # Storefront Federation
//!
//! Composes three independently owned services, accounts, a product catalog and
//! orders, into one query/mutation surface.
//!
//! ## Module Tour
//!
//! ### 1. The Stores ([`account_store`], [`catalog_store`], [`order_store`])
//! In-process leaf services, each a [`ResourceActor`](actor_store::ResourceActor) from the
//! `actor-store` crate. They own their records and answer one request at a time.
//!
//! ### 2. The Contracts ([`contracts`], [`clients`])
//! Narrow async traits for what the core consumes, implemented by clients that wrap the
//! store actors. Every call carries a [`RequestContext`](context::RequestContext) and is
//! bounded by its deadline. Pagination is normalized here ([`paging`]).
//!
//! ### 3. The Orchestrator ([`orchestrator`])
//! Places orders through an explicit stage pipeline (account, catalog, price, persist)
//! and reads order history enriched with current catalog data.
//!
//! ### 4. The Gateway ([`gateway`])
//! Resolves graph-shaped requests against the contracts with per-field timeouts and
//! per-field error isolation.
//!
//! ### 5. Wiring ([`lifecycle`], [`config`])
//! [`StorefrontSystem`](lifecycle::StorefrontSystem) builds everything once from a
//! [`SystemConfig`](config::SystemConfig) and shuts it down again.
//!
//! ## Error Handling
//! Each component has its own `thiserror` enum; all of them classify into an
//! [`ErrorKind`](error::ErrorKind), which is what clients see.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- config/storefront.yaml
//! ```

pub mod account_store;
pub mod catalog_store;
pub mod clients;
pub mod config;
pub mod context;
pub mod contracts;
pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod orchestrator;
pub mod order_store;
pub mod paging;
