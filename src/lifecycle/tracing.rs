//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! - The level comes from [`LogConfig::level`] unless `RUST_LOG` is set, in which case
//!   `RUST_LOG` wins.
//! - Module paths are hidden (`with_target(false)`); store logs carry an `entity_type`
//!   field and resolver logs a `request_id` instead.
//! - Output is the compact human format by default, or one JSON object per line when
//!   `log.json` is set.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads at every client call
//! RUST_LOG=debug cargo run
//!
//! # Only the orchestrator's stage spans
//! RUST_LOG=storefront::orchestrator=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` an order placement reads roughly:
//!
//! ```text
//! INFO Created entity_type="Account" id=01J... size=1
//! INFO place_order:persist: Order stored order_id=01J...
//! INFO place_order:persist: Order placed account_id=01J... total=20.0 lines=1
//! ```

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // Don't show module paths - we use entity_type instead

    if config.json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
