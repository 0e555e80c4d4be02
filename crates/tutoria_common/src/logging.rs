//! Logging utilities for the Tutoria application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the Tutoria application. It includes functions for initializing the
//! tracing subscriber and for logging results with context.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// This function should be called at the start of the application to set up
/// logging. It configures the tracing subscriber with the specified log level
/// and formats log messages with timestamps, log levels, targets, and file/line
/// information.
///
/// # Examples
///
/// ```
/// use tutoria_common::logging;
///
/// // Initialize with default log level (INFO)
/// logging::init();
///
/// // Initialize with a specific log level
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// # Arguments
///
/// * `level` - The minimum log level to display.
pub fn init_with_level(level: Level) {
    let filter =
        EnvFilter::from_default_env().add_directive(format!("tutoria={}", level).parse().unwrap());

    // Use try_init to handle the case where a global default subscriber has already been set
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log an error with context at the ERROR level.
///
/// # Arguments
///
/// * `error` - The error to log.
/// * `context` - Additional context information about the error.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// This function logs a success message at the INFO level if the result is Ok,
/// or an error message at the ERROR level if the result is Err.
///
/// # Returns
///
/// The original result, allowing this function to be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
