//! Common functions used across test cases.

pub mod fixture;

pub use fixture::{FixtureBuilder, FixtureDatabase};

/// Route `log` records (and `tracing` events through its `log` feature) to the test output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
