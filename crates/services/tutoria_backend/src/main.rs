// File: services/tutoria_backend/src/main.rs
mod app_state;

use app_state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tutoria_common::services::ServiceFactory;
use tutoria_config::load_config;

#[cfg(feature = "availability")]
use tutoria_availability::routes as availability_routes;
#[cfg(feature = "notifications")]
use tutoria_notifications::routes as notifications_routes;
#[cfg(feature = "ratings")]
use tutoria_ratings::routes as ratings_routes;
#[cfg(feature = "requests")]
use tutoria_requests::routes as requests_routes;
#[cfg(feature = "sessions")]
use tutoria_sessions::routes as sessions_routes;

#[tokio::main]
async fn main() {
    tutoria_common::logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));
    let state = AppState::new(config.clone())
        .await
        .expect("Failed to wire application state");

    // Unauthenticated surface: welcome and health.
    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Tutoria API!" }))
        .merge(tutoria_common::routes());

    #[cfg(feature = "availability")]
    let availability_router = availability_routes::routes(
        config.clone(),
        state.schedules.clone(),
        state.session_calendar(),
    );
    #[cfg(feature = "sessions")]
    let sessions_router =
        sessions_routes::routes(config.clone(), state.sessions.clone(), state.notification_sink());
    #[cfg(feature = "requests")]
    let requests_router =
        requests_routes::routes(config.clone(), state.requests.clone(), state.notification_sink());
    #[cfg(feature = "notifications")]
    let notifications_router =
        notifications_routes::routes(config.clone(), state.notifications.clone());
    #[cfg(feature = "ratings")]
    let ratings_router = ratings_routes::routes(config.clone(), state.ratings.clone());

    let api_router = Router::new().nest("/api/v1", {
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut router = api_router;
        #[cfg(feature = "availability")]
        {
            router = router.merge(availability_router);
        }
        #[cfg(feature = "sessions")]
        {
            router = router.merge(sessions_router);
        }
        #[cfg(feature = "requests")]
        {
            router = router.merge(requests_router);
        }
        #[cfg(feature = "notifications")]
        {
            router = router.merge(notifications_router);
        }
        #[cfg(feature = "ratings")]
        {
            router = router.merge(ratings_router);
        }
        router
    });

    #[allow(unused_mut)]
    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "availability")]
        use tutoria_availability::doc::AvailabilityApiDoc;
        #[cfg(feature = "notifications")]
        use tutoria_notifications::doc::NotificationsApiDoc;
        #[cfg(feature = "ratings")]
        use tutoria_ratings::doc::RatingsApiDoc;
        #[cfg(feature = "requests")]
        use tutoria_requests::doc::RequestsApiDoc;
        #[cfg(feature = "sessions")]
        use tutoria_sessions::doc::SessionsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Tutoria API",
                version = "0.1.0",
                description = "Tutoria Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Tutoria", description = "Core service endpoints")),
            servers( (url = "/api/v1", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        // Create the merged OpenAPI document
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "availability")]
        openapi_doc.merge(AvailabilityApiDoc::openapi());
        #[cfg(feature = "sessions")]
        openapi_doc.merge(SessionsApiDoc::openapi());
        #[cfg(feature = "requests")]
        openapi_doc.merge(RequestsApiDoc::openapi());
        #[cfg(feature = "notifications")]
        openapi_doc.merge(NotificationsApiDoc::openapi());
        #[cfg(feature = "ratings")]
        openapi_doc.merge(RatingsApiDoc::openapi());
        info!("Adding Swagger UI at /api/v1/docs");

        // Create the Swagger UI route, referencing the merged doc
        let swagger_ui =
            SwaggerUi::new("/api/v1/docs").url("/api/v1/docs/openapi.json", openapi_doc.clone());
        // Merge the Swagger UI into the main app router
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api/v1", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
