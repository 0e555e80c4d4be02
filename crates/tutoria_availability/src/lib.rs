// --- File: crates/tutoria_availability/src/lib.rs ---
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod storage;

pub use logic::{
    available_dates, generate_slots, weekday_name, AvailabilityError, AvailableDates,
    BookedDateSet, DayWindow, Slot, SlotSet, WeeklyAvailability,
};
pub use storage::{InMemoryScheduleRepository, ScheduleRepository};

#[cfg(test)]
mod handlers_test;
#[cfg(test)]
mod logic_proptest;
