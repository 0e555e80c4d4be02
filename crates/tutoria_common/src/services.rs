// --- File: crates/tutoria_common/src/services.rs ---
//! Service abstractions shared across feature crates.
//!
//! These traits decouple the crates from each other: the availability crate
//! needs the dates a tutor is already booked on without depending on the
//! sessions crate, and the requests/sessions crates push notifications without
//! depending on the notifications crate. The backend binary wires concrete
//! implementations through the `ServiceFactory`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait exposing the booked-date index of a tutor's calendar.
///
/// Implemented over the session store: a date counts as booked when it holds a
/// confirmed or in-progress session. Whole-day granularity by design.
pub trait SessionCalendar: Send + Sync {
    /// Error type returned by calendar operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calendar dates in `[from, to]` on which the tutor already has a
    /// confirmed session.
    fn booked_dates(
        &self,
        tutor_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> BoxFuture<'_, Vec<NaiveDate>, Self::Error>;
}

/// A trait for pushing a notification onto a user's feed.
pub trait NotificationSink: Send + Sync {
    /// Error type returned by notification operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append a notification to the user's feed.
    fn push(
        &self,
        user_id: &str,
        kind: &str,
        message: &str,
    ) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// A factory for creating service instances.
///
/// The backend implements this over its wired state; feature routers receive
/// the trait objects they need from it.
pub trait ServiceFactory: Send + Sync {
    /// Get the booked-date index, when the sessions feature is enabled.
    fn session_calendar(&self) -> Option<Arc<dyn SessionCalendar<Error = BoxedError>>>;

    /// Get the notification sink, when the notifications feature is enabled.
    fn notification_sink(&self) -> Option<Arc<dyn NotificationSink<Error = BoxedError>>>;
}

/// Represents the result of a notification push.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The ID of the stored notification.
    pub id: String,
    /// The status of the notification.
    pub status: String,
}
