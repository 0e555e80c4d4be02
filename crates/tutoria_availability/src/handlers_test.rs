#[cfg(test)]
mod tests {
    use crate::logic::{DayWindow, WeeklyAvailability};
    use crate::routes::routes;
    use crate::storage::{InMemoryScheduleRepository, ScheduleRepository};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;
    use tutoria_common::models::{AuthUser, UserRole};
    use tutoria_common::services::{BoxFuture, BoxedError, SessionCalendar};
    use tutoria_common::sign_token;
    use tutoria_config::{AppConfig, AuthConfig, BookingConfig};

    const SECRET: &str = "handler-test-secret";

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            use_availability: true,
            auth: Some(AuthConfig {
                token_secret: Some(SECRET.to_string()),
            }),
            ..AppConfig::default()
        })
    }

    fn test_config_with_booking(booking: BookingConfig) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            use_availability: true,
            auth: Some(AuthConfig {
                token_secret: Some(SECRET.to_string()),
            }),
            booking: Some(booking),
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

    /// Calendar stub returning a fixed set of booked dates.
    struct FixedCalendar {
        dates: Vec<NaiveDate>,
    }

    impl SessionCalendar for FixedCalendar {
        type Error = BoxedError;

        fn booked_dates(
            &self,
            _tutor_id: &str,
            _from: NaiveDate,
            _to: NaiveDate,
        ) -> BoxFuture<'_, Vec<NaiveDate>, Self::Error> {
            let dates = self.dates.clone();
            Box::pin(async move { Ok(dates) })
        }
    }

    fn app(schedules: Arc<dyn ScheduleRepository>) -> Router {
        routes(test_config(), schedules, None)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_requires_bearer_token() {
        let app = app(Arc::new(InMemoryScheduleRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_get_weekly_falls_back_to_default() {
        let app = app(Arc::new(InMemoryScheduleRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["default_derived"], true);
        assert_eq!(json["days"]["Monday"]["start_time"], "09:00");
        assert!(json["days"].get("Saturday").is_none());
    }

    #[tokio::test]
    async fn test_get_weekly_returns_stored_schedule() {
        let schedules = Arc::new(InMemoryScheduleRepository::new());
        let mut weekly = WeeklyAvailability::default();
        weekly.set_day("Tuesday", DayWindow::open("10:00", "14:00"));
        schedules.replace("tutor-1", weekly).await.unwrap();

        let app = app(schedules);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["default_derived"], false);
        assert_eq!(json["days"]["Tuesday"]["end_time"], "14:00");
    }

    #[tokio::test]
    async fn test_get_slots_rejects_bad_date() {
        let app = app(Arc::new(InMemoryScheduleRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1/slots?date=07-09-2026&duration_minutes=60")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_slots_default_derived_for_unconfigured_tutor() {
        let app = app(Arc::new(InMemoryScheduleRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1/slots?date=2026-09-07&duration_minutes=60")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["default_derived"], true);
        assert_eq!(json["slots"][0]["start"], "09:00");
        assert_eq!(json["slots"][0]["end"], "10:00");
    }

    #[tokio::test]
    async fn test_get_slots_closed_weekday_yields_no_slots() {
        let schedules = Arc::new(InMemoryScheduleRepository::new());
        let mut weekly = WeeklyAvailability::default();
        weekly.set_day("Tuesday", DayWindow::open("10:00", "14:00"));
        schedules.replace("tutor-1", weekly).await.unwrap();

        // 2026-09-07 is a Monday, absent from the stored schedule.
        let app = app(schedules);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1/slots?date=2026-09-07&duration_minutes=60")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["default_derived"], false);
        assert_eq!(json["slots"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_get_slots_explicitly_closed_day_yields_no_slots() {
        let schedules = Arc::new(InMemoryScheduleRepository::new());
        let mut weekly = WeeklyAvailability::default();
        weekly.set_day("Monday", DayWindow::closed());
        weekly.set_day("Tuesday", DayWindow::open("10:00", "14:00"));
        schedules.replace("tutor-1", weekly).await.unwrap();

        let app = app(schedules);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1/slots?date=2026-09-07&duration_minutes=60")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["default_derived"], false);
        assert_eq!(json["slots"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_get_slots_fallback_uses_configured_window() {
        // An unconfigured tutor's fallback comes from the booking config,
        // not a baked-in 09:00-17:00.
        let booking = BookingConfig {
            default_day_start: "08:00".to_string(),
            default_day_end: "11:00".to_string(),
            ..BookingConfig::default()
        };
        let app = routes(
            test_config_with_booking(booking),
            Arc::new(InMemoryScheduleRepository::new()),
            None,
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1/slots?date=2026-09-07&duration_minutes=60")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["default_derived"], true);
        let slots = json["slots"].as_array().unwrap();
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0]["start"], "08:00");
        assert_eq!(slots.last().unwrap()["end"], "11:00");
    }

    #[tokio::test]
    async fn test_get_weekly_fallback_uses_configured_window() {
        let booking = BookingConfig {
            default_day_start: "08:00".to_string(),
            default_day_end: "11:00".to_string(),
            ..BookingConfig::default()
        };
        let app = routes(
            test_config_with_booking(booking),
            Arc::new(InMemoryScheduleRepository::new()),
            None,
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["default_derived"], true);
        assert_eq!(json["days"]["Monday"]["start_time"], "08:00");
        assert_eq!(json["days"]["Friday"]["end_time"], "11:00");
    }

    #[tokio::test]
    async fn test_get_dates_excludes_booked_dates() {
        let today = chrono::Utc::now().date_naive();
        // Book the next 70 days solid; with a 60 day horizon nothing is left.
        let booked: Vec<NaiveDate> = (0..70)
            .map(|offset| today + chrono::Duration::days(offset))
            .collect();
        let app = routes(
            test_config(),
            Arc::new(InMemoryScheduleRepository::new()),
            Some(Arc::new(FixedCalendar { dates: booked })),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/availability/tutor-1/dates")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["dates"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_replace_schedule_requires_tutor_role() {
        let app = app(Arc::new(InMemoryScheduleRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/availability/schedule")
                    .header(header::AUTHORIZATION, bearer("student-1", UserRole::Student))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_replace_schedule_stores_under_caller_id() {
        let schedules = Arc::new(InMemoryScheduleRepository::new());
        let app = app(schedules.clone());

        let body = r#"{"Monday": {"available": true, "start_time": "10:00", "end_time": "18:00"}}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/availability/schedule")
                    .header(header::AUTHORIZATION, bearer("tutor-7", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["tutor_id"], "tutor-7");

        let stored = schedules.fetch("tutor-7").await.unwrap().unwrap();
        assert_eq!(stored.window_for("Monday").unwrap().end_time, "18:00");
    }

    #[tokio::test]
    async fn test_replace_schedule_rejects_invalid_window() {
        let app = app(Arc::new(InMemoryScheduleRepository::new()));
        let body = r#"{"Monday": {"available": true, "start_time": "18:00", "end_time": "10:00"}}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/availability/schedule")
                    .header(header::AUTHORIZATION, bearer("tutor-7", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_day_rejects_unknown_weekday() {
        let app = app(Arc::new(InMemoryScheduleRepository::new()));
        let body = r#"{"available": true, "start_time": "10:00", "end_time": "16:00"}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/availability/day/Funday")
                    .header(header::AUTHORIZATION, bearer("tutor-7", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_day_merges_into_existing_schedule() {
        let schedules = Arc::new(InMemoryScheduleRepository::new());
        let mut weekly = WeeklyAvailability::default();
        weekly.set_day("Monday", DayWindow::open("09:00", "17:00"));
        schedules.replace("tutor-7", weekly).await.unwrap();

        let app = app(schedules.clone());
        let body = r#"{"available": true, "start_time": "10:00", "end_time": "16:00"}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/availability/day/Wednesday")
                    .header(header::AUTHORIZATION, bearer("tutor-7", UserRole::Tutor))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = schedules.fetch("tutor-7").await.unwrap().unwrap();
        assert_eq!(stored.days.len(), 2);
        assert_eq!(stored.window_for("Wednesday").unwrap().start_time, "10:00");
    }
}
