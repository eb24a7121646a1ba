//! Startup, wiring and shutdown of the whole system.

pub mod system;
pub mod tracing;

pub use self::system::StorefrontSystem;
pub use self::tracing::setup_tracing;
