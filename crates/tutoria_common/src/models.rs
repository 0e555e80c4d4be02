// --- File: crates/tutoria_common/src/models.rs ---

// This file contains data structures and models that are common across the application:
// the authenticated-user claims carried by the bearer token, and the Session entity
// shared between the sessions crate and the database crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two account types the marketplace knows about. Every route that mutates
/// tutor-owned resources is gated on `Tutor`; session creation on `Student`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Tutor,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Student => write!(f, "student"),
            UserRole::Tutor => write!(f, "tutor"),
        }
    }
}

/// Claims extracted from a verified bearer token and inserted into request
/// extensions by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: String,
    pub role: UserRole,
}

/// How a tutoring session is delivered.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Online,
    Presencial,
    Hybrid,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Online => write!(f, "online"),
            SessionType::Presencial => write!(f, "presencial"),
            SessionType::Hybrid => write!(f, "hybrid"),
        }
    }
}

impl FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(SessionType::Online),
            "presencial" => Ok(SessionType::Presencial),
            "hybrid" => Ok(SessionType::Hybrid),
            other => Err(format!("unknown session type: {other}")),
        }
    }
}

/// Lifecycle states of a session. This service owns the transitions:
/// pending -> confirmed -> in_progress -> completed, with cancelled reachable
/// from pending and confirmed.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Pending => write!(f, "pending"),
            SessionStatus::Confirmed => write!(f, "confirmed"),
            SessionStatus::InProgress => write!(f, "in_progress"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SessionStatus::Pending),
            "confirmed" => Ok(SessionStatus::Confirmed),
            "in_progress" => Ok(SessionStatus::InProgress),
            "completed" => Ok(SessionStatus::Completed),
            "cancelled" => Ok(SessionStatus::Cancelled),
            other => Err(format!("unknown session status: {other}")),
        }
    }
}

/// A booked tutoring session.
///
/// Dates and times are kept in the wire formats the rest of the system speaks
/// (`YYYY-MM-DD` and `HH:MM`); the availability engine parses them on demand.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The unique identifier, assigned by the store.
    pub id: Option<i64>,
    pub tutor_id: String,
    pub student_id: String,
    /// Calendar date in YYYY-MM-DD format.
    pub date: String,
    /// Slot start in HH:MM format.
    pub start_time: String,
    pub duration_minutes: i64,
    pub session_type: SessionType,
    pub student_notes: Option<String>,
    /// hourly_rate * duration_minutes / 60, unrounded.
    pub price: f64,
    pub status: SessionStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a new pending session. The store assigns the id and timestamps.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tutor_id: String,
        student_id: String,
        date: String,
        start_time: String,
        duration_minutes: i64,
        session_type: SessionType,
        student_notes: Option<String>,
        price: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            tutor_id,
            student_id,
            date,
            start_time,
            duration_minutes,
            session_type,
            student_notes,
            price,
            status: SessionStatus::Pending,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
