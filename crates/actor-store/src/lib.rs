//! # Actor Store
//!
//! In-memory record stores built on the **Actor Model**. Each store is one Tokio task that
//! owns its records outright and answers requests arriving on an mpsc channel, one at a
//! time. Callers hold a cheap, cloneable [`ResourceClient`] and never touch the records
//! directly, so there is no shared mutable state and no locking.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type: its id, creation payload,
//!    query filter, listing order and match scoring.
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the record map.
//! 3. **Interface Layer** ([`ResourceClient`]) - type-safe request/reply calls.
//!
//! ## Request Surface
//!
//! | Request | Reply | Notes |
//! |---------|-------|-------|
//! | `create(params)` | the new record | id comes from the store's generator |
//! | `insert(item)` | its id | never overwrites, duplicates are a `Conflict` |
//! | `get(id)` | `Option<T>` | |
//! | `get_many(ids)` | `Vec<T>` | request order, unknown ids skipped, empty ids lists everything |
//! | `list(skip, take)` | `Vec<T>` | window over listing order |
//! | `query(filter, skip, take)` | `Vec<T>` | best match first |
//!
//! ## Testing
//!
//! [`mock::MockClient`] gives out a real `ResourceClient<T>` answered from scripted
//! expectations, so code built on top of a store can be tested for the exact calls it
//! makes. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
