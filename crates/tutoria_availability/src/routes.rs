// --- File: crates/tutoria_availability/src/routes.rs ---

use crate::handlers::{
    get_dates_handler, get_slots_handler, get_weekly_handler, replace_schedule_handler,
    update_day_handler, AvailabilityState,
};
use crate::storage::ScheduleRepository;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tutoria_common::auth::{auth_middleware, AuthState};
use tutoria_common::services::{BoxedError, SessionCalendar};
use tutoria_config::AppConfig;

/// Creates a router containing all routes for the availability feature.
///
/// All routes require a bearer token; the schedule mutations additionally
/// require the tutor role (checked in the handlers).
pub fn routes(
    config: Arc<AppConfig>,
    schedules: Arc<dyn ScheduleRepository>,
    sessions: Option<Arc<dyn SessionCalendar<Error = BoxedError>>>,
) -> Router {
    let auth_state = AuthState::new(config.clone());
    let state = Arc::new(AvailabilityState {
        config,
        schedules,
        sessions,
    });

    Router::new()
        .route("/availability/{tutor_id}", get(get_weekly_handler))
        .route("/availability/{tutor_id}/dates", get(get_dates_handler))
        .route("/availability/{tutor_id}/slots", get(get_slots_handler))
        .route("/availability/schedule", post(replace_schedule_handler))
        .route("/availability/day/{day}", put(update_day_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state)
}
