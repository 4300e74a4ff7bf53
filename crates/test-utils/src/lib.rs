//! Utilities shared by the test suites of the workspace.

#![warn(unused_crate_dependencies, unreachable_pub)]

#[macro_use]
extern crate tracing;

// Macros useful for testing.
mod macros;

pub mod promises;
pub use promises::{TestError, delayed, rejected, resolved};

// re-exports for convenience, used by the macros
pub use tokio;

/// Initializes tracing for tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
