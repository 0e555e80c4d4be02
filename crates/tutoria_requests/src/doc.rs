// File: crates/tutoria_requests/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{CreateRequestPayload, RejectPayload, ReschedulePayload};
use crate::logic::{RequestStatus, SessionRequest};

#[utoipa::path(
    post,
    path = "/session-requests",
    request_body(content = CreateRequestPayload, example = json!({
        "tutor_id": "tutor-42",
        "message": "Could we do a trial lesson this week?"
    })),
    responses(
        (status = 201, description = "The created pending request", body = SessionRequest),
        (status = 400, description = "Missing tutor_id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not a student")
    )
)]
fn doc_create_request_handler() {}

#[utoipa::path(
    get,
    path = "/session-requests/tutor",
    responses(
        (status = 200, description = "The tutor's inbox, newest first", body = Vec<SessionRequest>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not a tutor")
    )
)]
fn doc_list_tutor_requests_handler() {}

#[utoipa::path(
    post,
    path = "/session-requests/{id}/accept",
    params(
        ("id" = String, Path, description = "The request ID")
    ),
    responses(
        (status = 200, description = "The accepted request", body = SessionRequest),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Request is addressed to another tutor"),
        (status = 404, description = "No request with that ID"),
        (status = 409, description = "Request already resolved")
    )
)]
fn doc_accept_request_handler() {}

#[utoipa::path(
    post,
    path = "/session-requests/{id}/reject",
    params(
        ("id" = String, Path, description = "The request ID")
    ),
    request_body(content = RejectPayload, example = json!({
        "reason": "I am fully booked this month"
    })),
    responses(
        (status = 200, description = "The rejected request", body = SessionRequest),
        (status = 400, description = "Missing rejection reason"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Request is addressed to another tutor"),
        (status = 404, description = "No request with that ID"),
        (status = 409, description = "Request already resolved")
    )
)]
fn doc_reject_request_handler() {}

#[utoipa::path(
    post,
    path = "/session-requests/{id}/reschedule",
    params(
        ("id" = String, Path, description = "The request ID")
    ),
    request_body(content = ReschedulePayload, example = json!({
        "proposed_start": "2026-09-07T10:00:00Z",
        "proposed_end": "2026-09-07T11:00:00Z"
    })),
    responses(
        (status = 200, description = "The rescheduled request", body = SessionRequest),
        (status = 400, description = "Malformed or inverted time window"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Request is addressed to another tutor"),
        (status = 404, description = "No request with that ID"),
        (status = 409, description = "Request already resolved")
    )
)]
fn doc_reschedule_request_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_request_handler,
        doc_list_tutor_requests_handler,
        doc_accept_request_handler,
        doc_reject_request_handler,
        doc_reschedule_request_handler
    ),
    components(
        schemas(
            SessionRequest,
            RequestStatus,
            CreateRequestPayload,
            RejectPayload,
            ReschedulePayload
        )
    ),
    tags(
        (name = "session-requests", description = "Session Request API")
    ),
    servers(
        (url = "/api/v1", description = "Tutoria API server")
    )
)]
pub struct RequestsApiDoc;
