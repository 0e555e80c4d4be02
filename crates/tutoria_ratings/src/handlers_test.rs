#[cfg(test)]
mod tests {
    use crate::logic::Rating;
    use crate::routes::routes;
    use crate::storage::{InMemoryRatingRepository, RatingRepository};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use tutoria_common::models::{AuthUser, UserRole};
    use tutoria_common::sign_token;
    use tutoria_config::{AppConfig, AuthConfig};

    const SECRET: &str = "ratings-test-secret";

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            use_ratings: true,
            auth: Some(AuthConfig {
                token_secret: Some(SECRET.to_string()),
            }),
            ..AppConfig::default()
        })
    }

    fn bearer(user_id: &str, role: UserRole) -> String {
        let user = AuthUser {
            user_id: user_id.to_string(),
            role,
        };
        format!("Bearer {}", sign_token(SECRET, &user).unwrap())
    }

    fn app(repo: Arc<InMemoryRatingRepository>) -> Router {
        routes(test_config(), repo)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn create_request(payload: &Value, user_id: &str, role: UserRole) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ratings")
            .header(header::AUTHORIZATION, bearer(user_id, role))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_rating_is_student_only() {
        let app = app(Arc::new(InMemoryRatingRepository::new()));
        let payload = json!({ "session_id": 1, "tutor_id": "tutor-1", "score": 5 });
        let response = app
            .oneshot(create_request(&payload, "tutor-1", UserRole::Tutor))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_rating_rejects_out_of_range_score() {
        let app = app(Arc::new(InMemoryRatingRepository::new()));
        let payload = json!({ "session_id": 1, "tutor_id": "tutor-1", "score": 6 });
        let response = app
            .oneshot(create_request(&payload, "student-1", UserRole::Student))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rating_a_session_twice_is_conflict() {
        let repo = Arc::new(InMemoryRatingRepository::new());
        let app = app(repo);
        let payload = json!({ "session_id": 1, "tutor_id": "tutor-1", "score": 5 });

        let response = app
            .clone()
            .oneshot(create_request(&payload, "student-1", UserRole::Student))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(create_request(&payload, "student-1", UserRole::Student))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        // A different student may still rate the same session.
        let response = app
            .oneshot(create_request(&payload, "student-2", UserRole::Student))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_tutor_profile_aggregates_scores() {
        let repo = Arc::new(InMemoryRatingRepository::new());
        repo.create(Rating::new(1, "tutor-1", "student-1", 4, None).unwrap())
            .await
            .unwrap();
        repo.create(Rating::new(2, "tutor-1", "student-2", 5, None).unwrap())
            .await
            .unwrap();
        repo.create(Rating::new(3, "tutor-2", "student-1", 1, None).unwrap())
            .await
            .unwrap();

        let app = app(repo);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ratings/tutor/tutor-1")
                    .header(header::AUTHORIZATION, bearer("student-9", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["count"], 2);
        assert_eq!(json["average_score"], 4.5);
    }

    #[tokio::test]
    async fn test_unrated_tutor_has_no_average() {
        let app = app(Arc::new(InMemoryRatingRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ratings/tutor/tutor-9")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["count"], 0);
        assert!(json["average_score"].is_null());
    }

    #[tokio::test]
    async fn test_list_ratings_by_role() {
        let repo = Arc::new(InMemoryRatingRepository::new());
        repo.create(Rating::new(1, "tutor-1", "student-1", 4, None).unwrap())
            .await
            .unwrap();
        repo.create(Rating::new(2, "tutor-2", "student-1", 5, None).unwrap())
            .await
            .unwrap();
        let app = app(repo);

        // The student sees both ratings they gave.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/ratings")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 2);

        // The tutor sees only the one they received.
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ratings")
                    .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mark_helpful_bumps_counter() {
        let repo = Arc::new(InMemoryRatingRepository::new());
        let rating = repo
            .create(Rating::new(1, "tutor-1", "student-1", 4, None).unwrap())
            .await
            .unwrap();
        let app = app(repo);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/ratings/{}/helpful", rating.id))
                    .header(header::AUTHORIZATION, bearer("student-2", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["helpful_count"], 1);
    }

    #[tokio::test]
    async fn test_mark_helpful_unknown_id_is_not_found() {
        let app = app(Arc::new(InMemoryRatingRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ratings/no-such-id/helpful")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
