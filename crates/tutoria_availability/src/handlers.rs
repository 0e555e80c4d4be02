// File: crates/tutoria_availability/src/handlers.rs
use crate::logic::{
    available_dates, generate_slots, is_weekday_name, weekday_name, BookedDateSet, DayWindow,
    Slot, WeeklyAvailability,
};
use crate::storage::ScheduleRepository;
use axum::{
    extract::{Path, Query, State},
    response::Json,
    Extension,
};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};
use tutoria_common::models::{AuthUser, UserRole};
use tutoria_common::services::{BoxedError, SessionCalendar};
use tutoria_common::{require_role, TutoriaError};
use tutoria_config::AppConfig;

// Define shared state needed by availability handlers
#[derive(Clone)]
pub struct AvailabilityState {
    pub config: Arc<AppConfig>,
    pub schedules: Arc<dyn ScheduleRepository>,
    /// Booked-date index, wired when the sessions feature is enabled.
    pub sessions: Option<Arc<dyn SessionCalendar<Error = BoxedError>>>,
}

impl AvailabilityState {
    /// "Today" anchored in the configured time zone, falling back to UTC.
    fn today(&self) -> NaiveDate {
        let booking = self.config.booking();
        match booking
            .time_zone
            .as_deref()
            .and_then(|name| Tz::from_str(name).ok())
        {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Utc::now().date_naive(),
        }
    }

    /// Configured fallback window for tutors with no stored schedule.
    fn fallback_window(&self) -> DayWindow {
        let booking = self.config.booking();
        DayWindow::open(&booking.default_day_start, &booking.default_day_end)
    }

    fn ensure_enabled(&self) -> Result<(), TutoriaError> {
        if self.config.use_availability {
            Ok(())
        } else {
            Err(TutoriaError::ConfigError(
                "Availability service is disabled.".to_string(),
            ))
        }
    }

    async fn booked_dates(
        &self,
        tutor_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<BookedDateSet, TutoriaError> {
        match self.sessions.as_ref() {
            Some(calendar) => {
                let dates = calendar
                    .booked_dates(tutor_id, from, to)
                    .await
                    .map_err(|e| TutoriaError::InternalError(e.to_string()))?;
                Ok(dates.into_iter().collect())
            }
            None => Ok(BookedDateSet::new()),
        }
    }
}

// --- Responses ---

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Serialize, Debug)]
pub struct WeeklyAvailabilityResponse {
    pub tutor_id: String,
    pub days: WeeklyAvailability,
    /// True when the schedule was synthesized because the tutor never
    /// configured one; the client shows an explanatory banner.
    pub default_derived: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Serialize, Debug)]
pub struct AvailableDatesResponse {
    pub tutor_id: String,
    /// Ordered bookable dates in YYYY-MM-DD format.
    pub dates: Vec<String>,
    pub default_derived: bool,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SlotQuery {
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-09-07"))]
    pub date: String,

    /// Duration in minutes
    #[cfg_attr(feature = "openapi", schema(example = 60))]
    pub duration_minutes: i64,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Serialize, Debug)]
pub struct SlotsResponse {
    pub tutor_id: String,
    pub date: String,
    pub duration_minutes: i64,
    pub slots: Vec<Slot>,
    pub default_derived: bool,
}

// --- Handlers ---

/// Handler to get a tutor's weekly availability.
#[axum::debug_handler]
pub async fn get_weekly_handler(
    State(state): State<Arc<AvailabilityState>>,
    Path(tutor_id): Path<String>,
) -> Result<Json<WeeklyAvailabilityResponse>, TutoriaError> {
    state.ensure_enabled()?;

    let stored = state.schedules.fetch(&tutor_id).await?;
    let (days, default_derived) = match stored {
        Some(weekly) if !weekly.is_empty() => (weekly, false),
        _ => (
            WeeklyAvailability::weekday_default_with(&state.fallback_window()),
            true,
        ),
    };

    Ok(Json(WeeklyAvailabilityResponse {
        tutor_id,
        days,
        default_derived,
    }))
}

/// Handler to get the bookable calendar dates inside the rolling horizon.
#[axum::debug_handler]
pub async fn get_dates_handler(
    State(state): State<Arc<AvailabilityState>>,
    Path(tutor_id): Path<String>,
) -> Result<Json<AvailableDatesResponse>, TutoriaError> {
    state.ensure_enabled()?;

    let booking = state.config.booking();
    let today = state.today();
    let horizon_end = today + chrono::Duration::days(booking.horizon_days.max(0));

    let weekly = state
        .schedules
        .fetch(&tutor_id)
        .await?
        .unwrap_or_default();
    let booked = state.booked_dates(&tutor_id, today, horizon_end).await?;

    let result = available_dates(
        &weekly,
        &booked,
        today,
        booking.horizon_days,
        &state.fallback_window(),
    );
    debug!(
        "Calculated {} available dates for tutor {} (default_derived: {})",
        result.dates.len(),
        tutor_id,
        result.default_derived
    );

    Ok(Json(AvailableDatesResponse {
        tutor_id,
        dates: result
            .dates
            .into_iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect(),
        default_derived: result.default_derived,
    }))
}

/// Handler to get the candidate slots for a (date, duration) query.
#[axum::debug_handler]
pub async fn get_slots_handler(
    State(state): State<Arc<AvailabilityState>>,
    Path(tutor_id): Path<String>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<SlotsResponse>, TutoriaError> {
    state.ensure_enabled()?;

    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        TutoriaError::ValidationError("Invalid date format (YYYY-MM-DD)".to_string())
    })?;

    let weekly = state
        .schedules
        .fetch(&tutor_id)
        .await?
        .unwrap_or_default();
    // An empty schedule means "never configured": the generator falls back to
    // the default window and flags the result. A weekday absent from a
    // configured schedule is closed, not defaulted.
    let closed = DayWindow::closed();
    let window = if weekly.is_empty() {
        None
    } else {
        Some(weekly.window_for(weekday_name(date)).unwrap_or(&closed))
    };

    let booking = state.config.booking();
    let slot_set = generate_slots(
        window,
        query.duration_minutes,
        booking.slot_step_minutes,
        &state.fallback_window(),
    )?;

    Ok(Json(SlotsResponse {
        tutor_id,
        date: query.date,
        duration_minutes: query.duration_minutes,
        slots: slot_set.slots,
        default_derived: slot_set.default_derived,
    }))
}

/// Handler to replace the authenticated tutor's whole weekly schedule.
#[axum::debug_handler]
pub async fn replace_schedule_handler(
    State(state): State<Arc<AvailabilityState>>,
    Extension(user): Extension<AuthUser>,
    Json(weekly): Json<WeeklyAvailability>,
) -> Result<Json<WeeklyAvailabilityResponse>, TutoriaError> {
    state.ensure_enabled()?;
    require_role(&user, UserRole::Tutor)?;

    weekly.validate()?;
    let stored = state.schedules.replace(&user.user_id, weekly).await?;
    info!("Tutor {} replaced their weekly schedule", user.user_id);

    Ok(Json(WeeklyAvailabilityResponse {
        tutor_id: user.user_id,
        days: stored,
        default_derived: false,
    }))
}

/// Handler to update one weekday of the authenticated tutor's schedule.
#[axum::debug_handler]
pub async fn update_day_handler(
    State(state): State<Arc<AvailabilityState>>,
    Extension(user): Extension<AuthUser>,
    Path(day): Path<String>,
    Json(window): Json<DayWindow>,
) -> Result<Json<WeeklyAvailabilityResponse>, TutoriaError> {
    state.ensure_enabled()?;
    require_role(&user, UserRole::Tutor)?;

    if !is_weekday_name(&day) {
        return Err(TutoriaError::ValidationError(format!(
            "unknown weekday: {day}"
        )));
    }
    window.validate()?;

    let stored = state.schedules.upsert_day(&user.user_id, &day, window).await?;
    info!("Tutor {} updated their {} hours", user.user_id, day);

    Ok(Json(WeeklyAvailabilityResponse {
        tutor_id: user.user_id,
        days: stored,
        default_derived: false,
    }))
}
