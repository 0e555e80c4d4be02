//! Repository for tutoring sessions
//!
//! This module defines the storage interface for the Session entity. The
//! entity itself lives in tutoria_common so HTTP crates do not depend on the
//! database layer for their wire types.

use crate::error::DbError;

// Re-export the session model from tutoria_common for convenience
pub use tutoria_common::models::{Session, SessionStatus, UserRole};

/// Repository for tutoring sessions
///
/// Dates are passed in the `YYYY-MM-DD` wire format used across the system;
/// lexicographic ordering on that format matches chronological ordering.
pub trait SessionRepository {
    /// Initialize the database schema, creating the sessions table if it
    /// does not already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Persist a new session and return it with its ID assigned.
    fn create(
        &self,
        session: Session,
    ) -> impl std::future::Future<Output = Result<Session, DbError>> + Send;

    /// Find a session by ID.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Session>, DbError>> + Send;

    /// List the sessions a user participates in, as tutor or as student
    /// depending on their role, ordered by date and start time.
    fn list_for_user(
        &self,
        user_id: &str,
        role: UserRole,
    ) -> impl std::future::Future<Output = Result<Vec<Session>, DbError>> + Send;

    /// Set the status of a session, returning the updated session, or None if
    /// no session with that ID exists.
    fn update_status(
        &self,
        id: i64,
        status: SessionStatus,
    ) -> impl std::future::Future<Output = Result<Option<Session>, DbError>> + Send;

    /// Distinct dates in `[from, to]` on which the tutor has a confirmed or
    /// in-progress session. Feeds the whole-day booked-date index.
    fn booked_dates(
        &self,
        tutor_id: &str,
        from: &str,
        to: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, DbError>> + Send;
}
