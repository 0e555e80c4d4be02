// --- File: crates/tutoria_availability/src/logic.rs ---
//! The booking slot & availability engine.
//!
//! Pure computation over a tutor's recurring weekly hours: which calendar
//! dates inside the rolling horizon are bookable, and which discrete start
//! times a given day offers for a requested duration. Absent configuration
//! degrades to a default week rather than failing; every result carries a
//! `default_derived` flag so callers can disclose the fallback instead of
//! re-deriving the condition.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tutoria_common::TutoriaError;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<AvailabilityError> for TutoriaError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::TimeParseError(msg) => TutoriaError::ParseError(msg),
            AvailabilityError::ValidationError(msg) => TutoriaError::ValidationError(msg),
        }
    }
}

// --- Constants ---

/// Rolling calendar horizon, in days from today.
pub const DEFAULT_HORIZON_DAYS: i64 = 60;
/// Fixed slot start alignment. Independent of the requested duration, so a
/// 90-minute duration still offers starts every 30 minutes (overlapping
/// candidates by design).
pub const DEFAULT_SLOT_STEP_MINUTES: i64 = 30;
/// Fallback open window when a tutor has no configured hours.
pub const DEFAULT_DAY_START: &str = "09:00";
pub const DEFAULT_DAY_END: &str = "17:00";

/// Weekday names in the Sunday=0 convention.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The weekday bucket a calendar date falls into.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Whether `name` is one of the seven weekday names.
pub fn is_weekday_name(name: &str) -> bool {
    WEEKDAY_NAMES.contains(&name)
}

/// Parse a wire-format `HH:MM` time.
pub fn parse_hm(value: &str) -> Result<NaiveTime, AvailabilityError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| AvailabilityError::TimeParseError(format!("{value}: {e}")))
}

/// Format a time back into the wire `HH:MM` format.
pub fn format_hm(value: NaiveTime) -> String {
    value.format("%H:%M").to_string()
}

// --- Data Structures ---

/// One weekday's open/closed flag and open window, `HH:MM` wire format.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub available: bool,
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub start_time: String,
    #[cfg_attr(feature = "openapi", schema(example = "17:00"))]
    pub end_time: String,
}

impl DayWindow {
    pub fn open(start_time: &str, end_time: &str) -> Self {
        Self {
            available: true,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    pub fn closed() -> Self {
        Self {
            available: false,
            start_time: DEFAULT_DAY_START.to_string(),
            end_time: DEFAULT_DAY_END.to_string(),
        }
    }

    /// An open day must carry a well-formed window with `start < end`.
    pub fn validate(&self) -> Result<(), AvailabilityError> {
        if !self.available {
            return Ok(());
        }
        let start = parse_hm(&self.start_time)?;
        let end = parse_hm(&self.end_time)?;
        if start >= end {
            return Err(AvailabilityError::ValidationError(format!(
                "start_time {} must be before end_time {}",
                self.start_time, self.end_time
            )));
        }
        Ok(())
    }
}

/// A tutor's recurring weekly hours: weekday name to open window.
/// Weekdays absent from the map are closed, except when the whole map is
/// empty, in which case the Monday-Friday default applies.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    #[serde(flatten)]
    #[cfg_attr(feature = "openapi", schema(value_type = BTreeMap<String, DayWindow>))]
    pub days: BTreeMap<String, DayWindow>,
}

impl WeeklyAvailability {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The synthesized default week: Monday-Friday 09:00-17:00, weekend closed.
    pub fn weekday_default() -> Self {
        Self::weekday_default_with(&DayWindow::open(DEFAULT_DAY_START, DEFAULT_DAY_END))
    }

    /// The synthesized default week with a configured open window.
    pub fn weekday_default_with(window: &DayWindow) -> Self {
        let mut days = BTreeMap::new();
        for name in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"] {
            days.insert(name.to_string(), window.clone());
        }
        Self { days }
    }

    pub fn window_for(&self, weekday: &str) -> Option<&DayWindow> {
        self.days.get(weekday)
    }

    pub fn set_day(&mut self, weekday: &str, window: DayWindow) {
        self.days.insert(weekday.to_string(), window);
    }

    /// Every key must be a weekday name and every open day a valid window.
    pub fn validate(&self) -> Result<(), AvailabilityError> {
        for (name, window) in &self.days {
            if !is_weekday_name(name) {
                return Err(AvailabilityError::ValidationError(format!(
                    "unknown weekday: {name}"
                )));
            }
            window.validate()?;
        }
        Ok(())
    }
}

/// Calendar dates already holding a confirmed session. Whole-day granularity:
/// membership blocks the date regardless of the weekly model.
pub type BookedDateSet = BTreeSet<NaiveDate>;

/// The bookable dates inside the horizon, plus the fallback disclosure flag.
#[derive(Debug, Clone)]
pub struct AvailableDates {
    pub dates: Vec<NaiveDate>,
    pub default_derived: bool,
}

/// A discrete candidate start for a session of fixed duration, `HH:MM`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub start: String,
    #[cfg_attr(feature = "openapi", schema(example = "11:00"))]
    pub end: String,
}

/// The slots offered for one (date, duration) query.
#[derive(Debug, Clone)]
pub struct SlotSet {
    pub slots: Vec<Slot>,
    pub default_derived: bool,
}

// --- Availability Logic ---

/// Calculates the bookable calendar dates in `[today, today + horizon_days]`.
///
/// A date is bookable when it is not in the past, its weekday is open in the
/// weekly model, and it is not in the booked-date set. An empty weekly model
/// degrades to a Monday-Friday week using the `fallback` window and flags the
/// result as default-derived. Eagerly materialized; the horizon is small.
pub fn available_dates(
    weekly: &WeeklyAvailability,
    booked: &BookedDateSet,
    today: NaiveDate,
    horizon_days: i64,
    fallback: &DayWindow,
) -> AvailableDates {
    let default_derived = weekly.is_empty();
    let fallback_week;
    let schedule = if default_derived {
        fallback_week = WeeklyAvailability::weekday_default_with(fallback);
        &fallback_week
    } else {
        weekly
    };

    let mut dates = Vec::new();
    for offset in 0..=horizon_days.max(0) {
        let date = match today.checked_add_signed(Duration::days(offset)) {
            Some(date) => date,
            None => break,
        };
        let open = schedule
            .window_for(weekday_name(date))
            .map(|window| window.available)
            .unwrap_or(false);
        if open && !booked.contains(&date) {
            dates.push(date);
        }
    }

    AvailableDates {
        dates,
        default_derived,
    }
}

/// Produces the candidate slots for one day.
///
/// Starts are aligned to `step_minutes` boundaries relative to the window
/// start; a slot is offered only if `start + duration <= end` (no partial
/// slots). A missing window, meaning the tutor never configured a schedule,
/// falls back to the `fallback` window and flags the result as
/// default-derived; an explicitly closed day yields zero slots and no
/// fallback.
pub fn generate_slots(
    window: Option<&DayWindow>,
    duration_minutes: i64,
    step_minutes: i64,
    fallback: &DayWindow,
) -> Result<SlotSet, AvailabilityError> {
    if duration_minutes <= 0 {
        return Err(AvailabilityError::ValidationError(
            "duration_minutes must be positive".to_string(),
        ));
    }
    let step_minutes = if step_minutes > 0 {
        step_minutes
    } else {
        DEFAULT_SLOT_STEP_MINUTES
    };

    match window {
        Some(window) if !window.available => Ok(SlotSet {
            slots: Vec::new(),
            default_derived: false,
        }),
        Some(window) => {
            let start = parse_hm(&window.start_time)?;
            let end = parse_hm(&window.end_time)?;
            Ok(SlotSet {
                slots: slots_in_window(start, end, duration_minutes, step_minutes),
                default_derived: false,
            })
        }
        None => {
            let start = parse_hm(&fallback.start_time)?;
            let end = parse_hm(&fallback.end_time)?;
            Ok(SlotSet {
                slots: slots_in_window(start, end, duration_minutes, step_minutes),
                default_derived: true,
            })
        }
    }
}

fn slots_in_window(
    window_start: NaiveTime,
    window_end: NaiveTime,
    duration_minutes: i64,
    step_minutes: i64,
) -> Vec<Slot> {
    let duration = Duration::minutes(duration_minutes);
    let step = Duration::minutes(step_minutes);

    let mut slots = Vec::new();
    let mut cursor = window_start;
    loop {
        let (slot_end, end_wrapped) = cursor.overflowing_add_signed(duration);
        // Crossing midnight terminates the scan; later starts only get worse.
        if end_wrapped != 0 || slot_end > window_end {
            break;
        }
        slots.push(Slot {
            start: format_hm(cursor),
            end: format_hm(slot_end),
        });
        let (next, step_wrapped) = cursor.overflowing_add_signed(step);
        if step_wrapped != 0 {
            break;
        }
        cursor = next;
    }
    slots
}
