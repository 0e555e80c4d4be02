// File: services/tutoria_backend/src/app_state.rs
//! Wiring of the feature stores and the cross-feature service seams.

use std::sync::Arc;
use tutoria_common::services::{BoxedError, NotificationSink, ServiceFactory, SessionCalendar};
use tutoria_config::AppConfig;

#[cfg(feature = "availability")]
use tutoria_availability::storage::InMemoryScheduleRepository;
#[cfg(feature = "sessions")]
use tutoria_db::SessionStore;
#[cfg(feature = "notifications")]
use tutoria_notifications::{InMemoryNotificationRepository, NotificationDispatcher};
#[cfg(feature = "ratings")]
use tutoria_ratings::InMemoryRatingRepository;
#[cfg(feature = "requests")]
use tutoria_requests::InMemoryRequestRepository;
#[cfg(feature = "sessions")]
use tutoria_sessions::SessionCalendarAdapter;

/// The backend's shared state: one store per enabled feature.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    #[cfg(feature = "sessions")]
    pub sessions: SessionStore,
    #[cfg(feature = "availability")]
    pub schedules: Arc<InMemoryScheduleRepository>,
    #[cfg(feature = "requests")]
    pub requests: Arc<InMemoryRequestRepository>,
    #[cfg(feature = "notifications")]
    pub notifications: Arc<InMemoryNotificationRepository>,
    #[cfg(feature = "ratings")]
    pub ratings: Arc<InMemoryRatingRepository>,
}

impl AppState {
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            #[cfg(feature = "sessions")]
            sessions: SessionStore::from_app_config(&config).await?,
            #[cfg(feature = "availability")]
            schedules: Arc::new(InMemoryScheduleRepository::new()),
            #[cfg(feature = "requests")]
            requests: Arc::new(InMemoryRequestRepository::new()),
            #[cfg(feature = "notifications")]
            notifications: Arc::new(InMemoryNotificationRepository::new()),
            #[cfg(feature = "ratings")]
            ratings: Arc::new(InMemoryRatingRepository::new()),
            config,
        })
    }
}

impl ServiceFactory for AppState {
    fn session_calendar(&self) -> Option<Arc<dyn SessionCalendar<Error = BoxedError>>> {
        #[cfg(feature = "sessions")]
        {
            if self.config.use_sessions {
                return Some(Arc::new(SessionCalendarAdapter::new(self.sessions.clone())));
            }
        }
        None
    }

    fn notification_sink(&self) -> Option<Arc<dyn NotificationSink<Error = BoxedError>>> {
        #[cfg(feature = "notifications")]
        {
            if self.config.use_notifications {
                return Some(Arc::new(NotificationDispatcher::new(
                    self.notifications.clone(),
                )));
            }
        }
        None
    }
}
