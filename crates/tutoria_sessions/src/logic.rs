// --- File: crates/tutoria_sessions/src/logic.rs ---
//! Booking workflow and session lifecycle rules.
//!
//! The booking wizard is a linear state machine: date, then time, then
//! details, then a confirmation step that prices the draft and freezes it
//! into a pending session. Each step guards its inputs, so a draft can never
//! reach confirmation with missing or malformed data. The lifecycle half
//! owns the status transitions a stored session may take.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tutoria_common::models::{Session, SessionStatus, SessionType};
use tutoria_common::TutoriaError;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid step: {0}")]
    StepError(String),
    #[error("Invalid status transition: {0}")]
    TransitionError(String),
}

impl From<BookingError> for TutoriaError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::ValidationError(msg) => TutoriaError::ValidationError(msg),
            BookingError::StepError(msg) => TutoriaError::ValidationError(msg),
            BookingError::TransitionError(msg) => TutoriaError::ConflictError(msg),
        }
    }
}

/// Session price: hourly rate scaled to the booked duration, unrounded.
/// Display rounding is the client's concern.
pub fn session_price(hourly_rate: f64, duration_minutes: i64) -> f64 {
    hourly_rate * duration_minutes as f64 / 60.0
}

// --- Lifecycle ---

/// The operations a caller may perform on a stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    Confirm,
    Start,
    End,
    Cancel,
}

/// The status a session moves to under `action`, or a transition error when
/// the action is not legal from the current status.
pub fn apply_transition(
    current: SessionStatus,
    action: SessionAction,
) -> Result<SessionStatus, BookingError> {
    use SessionAction::*;
    use SessionStatus::*;
    match (current, action) {
        (Pending, Confirm) => Ok(Confirmed),
        (Confirmed, Start) => Ok(InProgress),
        (InProgress, End) => Ok(Completed),
        (Pending, Cancel) | (Confirmed, Cancel) => Ok(Cancelled),
        (current, action) => Err(BookingError::TransitionError(format!(
            "cannot {action:?} a {current} session"
        ))),
    }
}

// --- Booking Wizard ---

/// The wizard steps, in order. `back()` walks them in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    SelectingDate,
    SelectingTime,
    EnteringDetails,
    Confirming,
    Submitted,
}

/// A booking draft moving through the wizard. Fields fill in step order and
/// survive `back()`, so returning to an earlier step keeps later answers
/// until they are overwritten.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    step: BookingStep,
    tutor_id: String,
    hourly_rate: f64,
    date: Option<String>,
    start_time: Option<String>,
    duration_minutes: Option<i64>,
    session_type: Option<SessionType>,
    student_notes: Option<String>,
}

impl BookingFlow {
    pub fn new(tutor_id: &str, hourly_rate: f64) -> Result<Self, BookingError> {
        if hourly_rate < 0.0 {
            return Err(BookingError::ValidationError(
                "hourly_rate must not be negative".to_string(),
            ));
        }
        Ok(Self {
            step: BookingStep::SelectingDate,
            tutor_id: tutor_id.to_string(),
            hourly_rate,
            date: None,
            start_time: None,
            duration_minutes: None,
            session_type: None,
            student_notes: None,
        })
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    fn expect_step(&self, step: BookingStep) -> Result<(), BookingError> {
        if self.step == step {
            Ok(())
        } else {
            Err(BookingError::StepError(format!(
                "expected step {:?}, draft is at {:?}",
                step, self.step
            )))
        }
    }

    /// Step 1: pick the calendar date, `YYYY-MM-DD`.
    pub fn select_date(&mut self, date: &str) -> Result<(), BookingError> {
        self.expect_step(BookingStep::SelectingDate)?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            BookingError::ValidationError("Invalid date format (YYYY-MM-DD)".to_string())
        })?;
        self.date = Some(date.to_string());
        self.step = BookingStep::SelectingTime;
        Ok(())
    }

    /// Step 2: pick the slot start (`HH:MM`) and duration.
    pub fn select_time(&mut self, start_time: &str, duration_minutes: i64) -> Result<(), BookingError> {
        self.expect_step(BookingStep::SelectingTime)?;
        NaiveTime::parse_from_str(start_time, "%H:%M").map_err(|_| {
            BookingError::ValidationError("Invalid time format (HH:MM)".to_string())
        })?;
        if duration_minutes <= 0 {
            return Err(BookingError::ValidationError(
                "duration_minutes must be positive".to_string(),
            ));
        }
        self.start_time = Some(start_time.to_string());
        self.duration_minutes = Some(duration_minutes);
        self.step = BookingStep::EnteringDetails;
        Ok(())
    }

    /// Step 3: delivery mode and optional notes.
    pub fn enter_details(
        &mut self,
        session_type: SessionType,
        student_notes: Option<String>,
    ) -> Result<(), BookingError> {
        self.expect_step(BookingStep::EnteringDetails)?;
        self.session_type = Some(session_type);
        self.student_notes = student_notes.filter(|notes| !notes.trim().is_empty());
        self.step = BookingStep::Confirming;
        Ok(())
    }

    /// Return to the previous step. Collected answers are kept.
    pub fn back(&mut self) {
        self.step = match self.step {
            BookingStep::SelectingDate => BookingStep::SelectingDate,
            BookingStep::SelectingTime => BookingStep::SelectingDate,
            BookingStep::EnteringDetails => BookingStep::SelectingTime,
            BookingStep::Confirming => BookingStep::EnteringDetails,
            // A submitted draft is frozen.
            BookingStep::Submitted => BookingStep::Submitted,
        };
    }

    /// The price the confirmation step will charge, once a duration exists.
    pub fn quoted_price(&self) -> Option<f64> {
        self.duration_minutes
            .map(|duration| session_price(self.hourly_rate, duration))
    }

    /// Final step: freeze the draft into a pending session for `student_id`.
    ///
    /// Every guard has already run by the time the draft reaches Confirming,
    /// so the field unwraps here cannot fail; they are still surfaced as
    /// errors rather than panics.
    pub fn confirm(&mut self, student_id: &str) -> Result<Session, BookingError> {
        self.expect_step(BookingStep::Confirming)?;
        let missing = |field: &str| {
            BookingError::StepError(format!("draft reached Confirming without {field}"))
        };
        let date = self.date.clone().ok_or_else(|| missing("a date"))?;
        let start_time = self
            .start_time
            .clone()
            .ok_or_else(|| missing("a start time"))?;
        let duration_minutes = self
            .duration_minutes
            .ok_or_else(|| missing("a duration"))?;
        let session_type = self
            .session_type
            .ok_or_else(|| missing("a session type"))?;

        self.step = BookingStep::Submitted;
        Ok(Session::new(
            self.tutor_id.clone(),
            student_id.to_string(),
            date,
            start_time,
            duration_minutes,
            session_type,
            self.student_notes.clone(),
            session_price(self.hourly_rate, duration_minutes),
        ))
    }
}
