#![deny(missing_docs)]
//! Shared logging utilities for the content pipeline workspace.
//!
//! This crate provides the `pipeline_*` logging macros used by the harvest and
//! article jobs, a level helper for the command-line `--verbose` flag, and a
//! minimal test initializer for the global logger.

use log::LevelFilter;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! pipeline_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! pipeline_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! pipeline_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! pipeline_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! pipeline_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Maps the command-line verbosity switch to a level filter.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = level_for(cfg!(debug_assertions));

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
