//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `fragments`: accept/reject tables for every fragment entry point
//! - `trees`: shape of the trees built for representative inputs
//! - `diagnostics`: error positions, recovery and error limits

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod fragments;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Send parser traces to the test output when `RUST_LOG` is set.
pub(crate) fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer())
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}
