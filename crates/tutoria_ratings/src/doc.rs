// File: crates/tutoria_ratings/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{CreateRatingPayload, TutorRatingsResponse};
use crate::logic::Rating;

#[utoipa::path(
    get,
    path = "/ratings",
    responses(
        (status = 200, description = "The caller's ratings: given for students, received for tutors", body = Vec<Rating>),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_list_ratings_handler() {}

#[utoipa::path(
    post,
    path = "/ratings",
    request_body(content = CreateRatingPayload, example = json!({
        "session_id": 1,
        "tutor_id": "tutor-42",
        "score": 5,
        "comment": "Great explanations, very patient"
    })),
    responses(
        (status = 201, description = "The stored rating", body = Rating),
        (status = 400, description = "Score outside 1 to 5"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not a student"),
        (status = 409, description = "Session already rated by this student")
    )
)]
fn doc_create_rating_handler() {}

#[utoipa::path(
    get,
    path = "/ratings/tutor/{tutor_id}",
    params(
        ("tutor_id" = String, Path, description = "The tutor whose ratings to fetch")
    ),
    responses(
        (status = 200, description = "The tutor's ratings and exact mean score", body = TutorRatingsResponse,
         example = json!({
             "tutor_id": "tutor-42",
             "average_score": 4.5,
             "count": 2,
             "ratings": []
         })
        ),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
fn doc_tutor_ratings_handler() {}

#[utoipa::path(
    post,
    path = "/ratings/{id}/helpful",
    params(
        ("id" = String, Path, description = "The rating ID")
    ),
    responses(
        (status = 200, description = "The rating with its helpful counter bumped", body = Rating),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "No rating with that ID")
    )
)]
fn doc_mark_helpful_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_ratings_handler,
        doc_create_rating_handler,
        doc_tutor_ratings_handler,
        doc_mark_helpful_handler
    ),
    components(
        schemas(
            Rating,
            CreateRatingPayload,
            TutorRatingsResponse
        )
    ),
    tags(
        (name = "ratings", description = "Tutor Ratings API")
    ),
    servers(
        (url = "/api/v1", description = "Tutoria API server")
    )
)]
pub struct RatingsApiDoc;
