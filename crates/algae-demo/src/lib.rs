//! Support code for the `algae-demo` program.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: Overrides the log filter, using the [env_logger] syntax (eg.
//!   `RUST_LOG=algae=trace,algae_demo=info`).
//!
//! [env_logger]: https://docs.rs/env_logger

use log::LevelFilter;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some("algae"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `algae` will log at *trace* level.
/// Otherwise, they will log at *debug* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
