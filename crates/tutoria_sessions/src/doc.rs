// File: crates/tutoria_sessions/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::CreateSessionRequest;
use tutoria_common::models::{Session, SessionStatus, SessionType};

#[utoipa::path(
    get,
    path = "/sessions",
    responses(
        (status = 200, description = "The caller's sessions, ordered by date and start time", body = Vec<Session>),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_list_sessions_handler() {}

#[utoipa::path(
    get,
    path = "/sessions/{id}",
    params(
        ("id" = i64, Path, description = "The session ID")
    ),
    responses(
        (status = 200, description = "The session", body = Session),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not a participant"),
        (status = 404, description = "No session with that ID")
    )
)]
fn doc_get_session_handler() {}

#[utoipa::path(
    post,
    path = "/sessions",
    request_body(content = CreateSessionRequest, example = json!({
        "tutor_id": "tutor-42",
        "date": "2026-09-07",
        "start_time": "10:00",
        "duration_minutes": 90,
        "session_type": "online",
        "student_notes": "Preparing for the calculus midterm",
        "hourly_rate": 35.0
    })),
    responses(
        (status = 201, description = "The created pending session", body = Session,
         example = json!({
             "id": 1,
             "tutor_id": "tutor-42",
             "student_id": "student-7",
             "date": "2026-09-07",
             "start_time": "10:00",
             "duration_minutes": 90,
             "session_type": "online",
             "student_notes": "Preparing for the calculus midterm",
             "price": 52.5,
             "status": "pending",
             "created_at": "2026-08-24T09:00:00Z",
             "updated_at": "2026-08-24T09:00:00Z"
         })
        ),
        (status = 400, description = "Invalid date, time or duration"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not a student")
    )
)]
fn doc_create_session_handler() {}

#[utoipa::path(
    post,
    path = "/sessions/{id}/confirm",
    params(
        ("id" = i64, Path, description = "The session ID")
    ),
    responses(
        (status = 200, description = "The confirmed session", body = Session),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not the session's tutor"),
        (status = 404, description = "No session with that ID"),
        (status = 409, description = "Session is not pending")
    )
)]
fn doc_confirm_session_handler() {}

#[utoipa::path(
    post,
    path = "/sessions/{id}/start",
    params(
        ("id" = i64, Path, description = "The session ID")
    ),
    responses(
        (status = 200, description = "The in-progress session", body = Session),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not the session's tutor"),
        (status = 404, description = "No session with that ID"),
        (status = 409, description = "Session is not confirmed")
    )
)]
fn doc_start_session_handler() {}

#[utoipa::path(
    post,
    path = "/sessions/{id}/end",
    params(
        ("id" = i64, Path, description = "The session ID")
    ),
    responses(
        (status = 200, description = "The completed session", body = Session),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not the session's tutor"),
        (status = 404, description = "No session with that ID"),
        (status = 409, description = "Session is not in progress")
    )
)]
fn doc_end_session_handler() {}

#[utoipa::path(
    post,
    path = "/sessions/{id}/cancel",
    params(
        ("id" = i64, Path, description = "The session ID")
    ),
    responses(
        (status = 200, description = "The cancelled session", body = Session),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not a participant"),
        (status = 404, description = "No session with that ID"),
        (status = 409, description = "Session already started or finished")
    )
)]
fn doc_cancel_session_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_sessions_handler,
        doc_get_session_handler,
        doc_create_session_handler,
        doc_confirm_session_handler,
        doc_start_session_handler,
        doc_end_session_handler,
        doc_cancel_session_handler
    ),
    components(
        schemas(
            Session,
            SessionStatus,
            SessionType,
            CreateSessionRequest
        )
    ),
    tags(
        (name = "sessions", description = "Tutoring Session Booking API")
    ),
    servers(
        (url = "/api/v1", description = "Tutoria API server")
    )
)]
pub struct SessionsApiDoc;
