//! Structured logging setup
//!
//! Library crates emit `tracing` events; with the `log` feature enabled those
//! are forwarded to the `log` facade, which `env_logger` renders here.

use log::{info, warn};
use std::sync::Once;

use super::types::BuiltinError;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points
pub struct Logging;

impl Logging {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels come from `RUST_LOG`, e.g.
    /// - `RUST_LOG=info`
    /// - `RUST_LOG=rulecrypt_x509=debug,rulecrypt=info`
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("structured logging initialized");
        });
    }

    /// Initialize logging for test binaries
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Record a failed builtin call. Only the error is logged, never the argument.
    pub fn log_builtin_failure(name: &str, arg_len: usize, error: &BuiltinError) {
        warn!(
            "builtin {name} failed (arg_len: {arg_len}, code: {}): {}",
            error.code(),
            error.message()
        );
    }
}
