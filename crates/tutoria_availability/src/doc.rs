// File: crates/tutoria_availability/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{AvailableDatesResponse, SlotsResponse, WeeklyAvailabilityResponse};
use crate::logic::{DayWindow, Slot, WeeklyAvailability};

#[utoipa::path(
    get,
    path = "/availability/{tutor_id}",
    params(
        ("tutor_id" = String, Path, description = "The tutor whose weekly hours to fetch")
    ),
    responses(
        (status = 200, description = "Weekly availability", body = WeeklyAvailabilityResponse,
         example = json!({
             "tutor_id": "tutor-42",
             "days": {
                 "Monday": { "available": true, "start_time": "09:00", "end_time": "17:00" },
                 "Saturday": { "available": false, "start_time": "09:00", "end_time": "17:00" }
             },
             "default_derived": false
         })
        ),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_get_weekly_handler() {}

#[utoipa::path(
    get,
    path = "/availability/{tutor_id}/dates",
    params(
        ("tutor_id" = String, Path, description = "The tutor whose bookable dates to fetch")
    ),
    responses(
        (status = 200, description = "Bookable dates inside the rolling horizon", body = AvailableDatesResponse,
         example = json!({
             "tutor_id": "tutor-42",
             "dates": ["2026-09-07", "2026-09-08", "2026-09-09"],
             "default_derived": true
         })
        ),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Booked-date lookup failed")
    )
)]
fn doc_get_dates_handler() {}

#[utoipa::path(
    get,
    path = "/availability/{tutor_id}/slots",
    params(
        ("tutor_id" = String, Path, description = "The tutor whose slots to fetch"),
        ("date" = String, Query, description = "Date in YYYY-MM-DD format", example = "2026-09-07", format = "date"),
        ("duration_minutes" = i64, Query, description = "Duration in minutes", example = 60)
    ),
    responses(
        (status = 200, description = "Candidate slots for the day", body = SlotsResponse,
         example = json!({
             "tutor_id": "tutor-42",
             "date": "2026-09-07",
             "duration_minutes": 60,
             "slots": [
                 { "start": "09:00", "end": "10:00" },
                 { "start": "09:30", "end": "10:30" }
             ],
             "default_derived": false
         })
        ),
        (status = 400, description = "Invalid date or duration"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_get_slots_handler() {}

#[utoipa::path(
    post,
    path = "/availability/schedule",
    request_body(content = WeeklyAvailability, example = json!({
        "Monday": { "available": true, "start_time": "10:00", "end_time": "18:00" },
        "Wednesday": { "available": true, "start_time": "10:00", "end_time": "14:00" }
    })),
    responses(
        (status = 200, description = "Stored weekly schedule", body = WeeklyAvailabilityResponse),
        (status = 400, description = "Invalid weekday name or window"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not a tutor")
    )
)]
fn doc_replace_schedule_handler() {}

#[utoipa::path(
    put,
    path = "/availability/day/{day}",
    params(
        ("day" = String, Path, description = "Weekday name, e.g. Monday")
    ),
    request_body(content = DayWindow, example = json!({
        "available": true,
        "start_time": "10:00",
        "end_time": "16:00"
    })),
    responses(
        (status = 200, description = "Resulting weekly schedule", body = WeeklyAvailabilityResponse),
        (status = 400, description = "Invalid weekday name or window"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not a tutor")
    )
)]
fn doc_update_day_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_weekly_handler,
        doc_get_dates_handler,
        doc_get_slots_handler,
        doc_replace_schedule_handler,
        doc_update_day_handler
    ),
    components(
        schemas(
            WeeklyAvailability,
            DayWindow,
            Slot,
            WeeklyAvailabilityResponse,
            AvailableDatesResponse,
            SlotsResponse
        )
    ),
    tags(
        (name = "availability", description = "Tutor Availability API")
    ),
    servers(
        (url = "/api/v1", description = "Tutoria API server")
    )
)]
pub struct AvailabilityApiDoc;
