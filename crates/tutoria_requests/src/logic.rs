// --- File: crates/tutoria_requests/src/logic.rs ---
//! Session request lifecycle.
//!
//! A request is a student asking a tutor for a session before any slot is
//! committed. It is resolved exactly once: the tutor accepts it, rejects it
//! with a reason, or answers with a rescheduled time window. All three
//! resolutions only apply to a pending request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tutoria_common::TutoriaError;
use uuid::Uuid;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Request already resolved: {0}")]
    AlreadyResolved(String),
}

impl From<RequestError> for TutoriaError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::ValidationError(msg) => TutoriaError::ValidationError(msg),
            RequestError::AlreadyResolved(msg) => TutoriaError::ConflictError(msg),
        }
    }
}

/// Resolution state of a session request.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Rescheduled,
}

/// A student's request for a session with a tutor.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub id: String,
    pub tutor_id: String,
    pub student_id: String,
    pub status: RequestStatus,
    /// The student's note to the tutor.
    pub message: Option<String>,
    /// Counter-proposed window, RFC 3339, set when rescheduled.
    pub proposed_start: Option<String>,
    pub proposed_end: Option<String>,
    /// Set when rejected; always non-empty then.
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionRequest {
    pub fn new(tutor_id: &str, student_id: &str, message: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tutor_id: tutor_id.to_string(),
            student_id: student_id.to_string(),
            status: RequestStatus::Pending,
            message: message.filter(|m| !m.trim().is_empty()),
            proposed_start: None,
            proposed_end: None,
            rejection_reason: None,
            created_at: Utc::now(),
        }
    }

    fn ensure_pending(&self) -> Result<(), RequestError> {
        if self.status == RequestStatus::Pending {
            Ok(())
        } else {
            Err(RequestError::AlreadyResolved(format!(
                "request {} is already {:?}",
                self.id, self.status
            )))
        }
    }

    /// Accept the request as asked.
    pub fn accept(&mut self) -> Result<(), RequestError> {
        self.ensure_pending()?;
        self.status = RequestStatus::Accepted;
        Ok(())
    }

    /// Reject the request. The student always sees a reason.
    pub fn reject(&mut self, reason: &str) -> Result<(), RequestError> {
        self.ensure_pending()?;
        if reason.trim().is_empty() {
            return Err(RequestError::ValidationError(
                "A rejection reason is required".to_string(),
            ));
        }
        self.status = RequestStatus::Rejected;
        self.rejection_reason = Some(reason.trim().to_string());
        Ok(())
    }

    /// Answer with a counter-proposed time window.
    pub fn reschedule(&mut self, proposed_start: &str, proposed_end: &str) -> Result<(), RequestError> {
        self.ensure_pending()?;
        let start = DateTime::parse_from_rfc3339(proposed_start).map_err(|_| {
            RequestError::ValidationError("proposed_start must be RFC 3339".to_string())
        })?;
        let end = DateTime::parse_from_rfc3339(proposed_end).map_err(|_| {
            RequestError::ValidationError("proposed_end must be RFC 3339".to_string())
        })?;
        if start >= end {
            return Err(RequestError::ValidationError(
                "proposed_start must be before proposed_end".to_string(),
            ));
        }
        self.status = RequestStatus::Rescheduled;
        self.proposed_start = Some(proposed_start.to_string());
        self.proposed_end = Some(proposed_end.to_string());
        Ok(())
    }
}
