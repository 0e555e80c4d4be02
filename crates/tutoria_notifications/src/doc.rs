// File: crates/tutoria_notifications/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{CreateNotificationPayload, MarkAllReadResponse, UnreadResponse};
use crate::logic::Notification;

#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (status = 200, description = "The caller's feed, newest first", body = Vec<Notification>),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_list_notifications_handler() {}

#[utoipa::path(
    post,
    path = "/notifications",
    request_body(content = CreateNotificationPayload, example = json!({
        "kind": "reminder",
        "message": "Session with tutor-42 tomorrow at 10:00"
    })),
    responses(
        (status = 201, description = "The stored notification", body = Notification),
        (status = 400, description = "Missing kind or message"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_create_notification_handler() {}

#[utoipa::path(
    get,
    path = "/notifications/unread",
    responses(
        (status = 200, description = "Unread notifications and their count", body = UnreadResponse,
         example = json!({
             "count": 1,
             "notifications": [
                 {
                     "id": "3d9f3c5e-7a0f-4d3a-9a3e-0a1b2c3d4e5f",
                     "user_id": "student-7",
                     "kind": "session_confirmed",
                     "message": "Session on 2026-09-07 at 10:00 is now confirmed",
                     "read": false,
                     "created_at": "2026-08-24T09:00:00Z"
                 }
             ]
         })
        ),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_unread_notifications_handler() {}

#[utoipa::path(
    post,
    path = "/notifications/mark-all-read",
    responses(
        (status = 200, description = "How many notifications flipped to read", body = MarkAllReadResponse),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_mark_all_read_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_notifications_handler,
        doc_create_notification_handler,
        doc_unread_notifications_handler,
        doc_mark_all_read_handler
    ),
    components(
        schemas(
            Notification,
            CreateNotificationPayload,
            UnreadResponse,
            MarkAllReadResponse
        )
    ),
    tags(
        (name = "notifications", description = "Notification Feed API")
    ),
    servers(
        (url = "/api/v1", description = "Tutoria API server")
    )
)]
pub struct NotificationsApiDoc;
