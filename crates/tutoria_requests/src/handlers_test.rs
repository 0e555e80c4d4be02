#[cfg(test)]
mod tests {
    use crate::logic::SessionRequest;
    use crate::routes::routes;
    use crate::storage::{InMemoryRequestRepository, RequestRepository};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use tutoria_common::models::{AuthUser, UserRole};
    use tutoria_common::sign_token;
    use tutoria_config::{AppConfig, AuthConfig};

    const SECRET: &str = "requests-test-secret";

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            use_requests: true,
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

    fn app(repo: Arc<InMemoryRequestRepository>) -> Router {
        routes(test_config(), repo, None)
    }

    async fn seed_request(repo: &InMemoryRequestRepository) -> String {
        let request = SessionRequest::new("tutor-1", "student-1", None);
        repo.create(request).await.unwrap().id
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_request_is_student_only() {
        let app = app(Arc::new(InMemoryRequestRepository::new()));
        let payload = json!({ "tutor_id": "tutor-1" });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/session-requests")
                    .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_and_list_in_tutor_inbox() {
        let repo = Arc::new(InMemoryRequestRepository::new());
        let app = app(repo);

        let payload = json!({ "tutor_id": "tutor-1", "message": "trial lesson?" });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/session-requests")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["status"], "pending");
        assert_eq!(created["student_id"], "student-1");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/session-requests/tutor")
                    .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let inbox = body_json(response).await;
        assert_eq!(inbox.as_array().unwrap().len(), 1);
        assert_eq!(inbox[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_accept_rejects_foreign_tutor() {
        let repo = Arc::new(InMemoryRequestRepository::new());
        let id = seed_request(&repo).await;
        let app = app(repo);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/session-requests/{id}/accept"))
                    .header(header::AUTHORIZATION, bearer("tutor-2", UserRole::Tutor))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_accept_then_accept_again_is_conflict() {
        let repo = Arc::new(InMemoryRequestRepository::new());
        let id = seed_request(&repo).await;
        let app = app(repo);

        let accept = || {
            Request::builder()
                .method("POST")
                .uri(format!("/session-requests/{id}/accept"))
                .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                .body(Body::empty())
                .unwrap()
        };

        let response = app.clone().oneshot(accept()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "accepted");

        let response = app.oneshot(accept()).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_reject_requires_reason() {
        let repo = Arc::new(InMemoryRequestRepository::new());
        let id = seed_request(&repo).await;
        let app = app(repo.clone());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/session-requests/{id}/reject"))
                    .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"reason": ""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // The failed attempt must not resolve the request.
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.rejection_reason, None);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/session-requests/{id}/reject"))
                    .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"reason": "fully booked"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["rejection_reason"], "fully booked");
    }

    #[tokio::test]
    async fn test_reschedule_validates_window() {
        let repo = Arc::new(InMemoryRequestRepository::new());
        let id = seed_request(&repo).await;
        let app = app(repo);

        let payload = json!({
            "proposed_start": "2026-09-07T11:00:00Z",
            "proposed_end": "2026-09-07T10:00:00Z"
        });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/session-requests/{id}/reschedule"))
                    .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let payload = json!({
            "proposed_start": "2026-09-07T10:00:00Z",
            "proposed_end": "2026-09-07T11:00:00Z"
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/session-requests/{id}/reschedule"))
                    .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "rescheduled");
    }

    #[tokio::test]
    async fn test_unknown_request_is_not_found() {
        let app = app(Arc::new(InMemoryRequestRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/session-requests/no-such-id/accept")
                    .header(header::AUTHORIZATION, bearer("tutor-1", UserRole::Tutor))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
