// --- File: crates/tutoria_notifications/src/lib.rs ---
pub mod dispatcher;
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use dispatcher::NotificationDispatcher;
pub use logic::{InMemoryNotificationRepository, Notification, NotificationRepository};
