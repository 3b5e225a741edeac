//! Common test infrastructure for dejpeg integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Route `tracing` output through the test harness.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dejpeg=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_test_writer(),
        )
        .try_init();
}
