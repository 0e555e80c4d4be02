// --- File: crates/tutoria_sessions/src/lib.rs ---
pub mod calendar;
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use calendar::SessionCalendarAdapter;
pub use logic::{
    apply_transition, session_price, BookingError, BookingFlow, BookingStep, SessionAction,
};
