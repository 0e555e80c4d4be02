// --- File: crates/tutoria_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Tutoria errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for TutoriaError.
#[derive(Error, Debug)]
pub enum TutoriaError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred because the authenticated user may not perform the operation
    #[error("Forbidden: {0}")]
    ForbiddenError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred due to a conflict (e.g., invalid status transition)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Error that doesn't fit into any other category
    #[error("Other error: {0}")]
    OtherError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for TutoriaError {
    fn status_code(&self) -> u16 {
        match self {
            TutoriaError::ParseError(_) => 400,
            TutoriaError::ConfigError(_) => 500,
            TutoriaError::AuthError(_) => 401,
            TutoriaError::ForbiddenError(_) => 403,
            TutoriaError::ValidationError(_) => 400,
            TutoriaError::DatabaseError(_) => 500,
            TutoriaError::ConflictError(_) => 409,
            TutoriaError::NotFoundError(_) => 404,
            TutoriaError::InternalError(_) => 500,
            TutoriaError::OtherError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, TutoriaError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, TutoriaError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, TutoriaError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| TutoriaError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, TutoriaError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| TutoriaError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<serde_json::Error> for TutoriaError {
    fn from(err: serde_json::Error) -> Self {
        TutoriaError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for TutoriaError {
    fn from(err: std::io::Error) -> Self {
        TutoriaError::InternalError(err.to_string())
    }
}

impl From<chrono::ParseError> for TutoriaError {
    fn from(err: chrono::ParseError) -> Self {
        TutoriaError::ParseError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> TutoriaError {
    TutoriaError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> TutoriaError {
    TutoriaError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> TutoriaError {
    TutoriaError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> TutoriaError {
    TutoriaError::ConflictError(message.to_string())
}

pub fn forbidden<T: fmt::Display>(message: T) -> TutoriaError {
    TutoriaError::ForbiddenError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> TutoriaError {
    TutoriaError::InternalError(message.to_string())
}
