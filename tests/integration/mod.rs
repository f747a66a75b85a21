//! Shared fixtures for the integration tests.

#![allow(dead_code)]

pub mod mock_server;
pub mod scripted;

pub const TEST_TOKEN: &str = "test-token";

/// Route `tracing` output through the test harness. Set `RUST_LOG=wit_lib_rust=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
