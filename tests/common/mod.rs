//! Common test utilities and logging infrastructure
//!
//! This module provides structured logging for tests using the `tracing`
//! crate. It enables detailed debugging output when tests fail, especially
//! useful in CI.
//!
//! # Usage
//!
//! Import this module in your integration tests:
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//! ```
//!
//! Then call `init_test_logging()` at the start of tests that need logging.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=rowgrid::table=trace` - Module-specific tracing

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Sets up tracing with test writer output (captured by cargo test unless
/// `--nocapture` is used), file/line information, and target filtering.
/// The function is idempotent - calling it multiple times is safe.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rowgrid=debug,test=info"));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_test_writer()
                    .with_ansi(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(true)
                    .compact(),
            )
            .try_init()
            .ok();
    });
}
