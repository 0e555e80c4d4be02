// --- File: crates/tutoria_availability/src/storage.rs ---
//! Storage seam for weekly schedules.
//!
//! Dyn-safe so handlers hold a trait object; the in-memory implementation is
//! the default backend and the test double.

use crate::logic::{DayWindow, WeeklyAvailability};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tutoria_common::services::BoxFuture;
use tutoria_common::TutoriaError;

/// Repository for per-tutor weekly schedules.
pub trait ScheduleRepository: Send + Sync {
    /// The stored schedule, or None when the tutor never configured one.
    fn fetch(&self, tutor_id: &str) -> BoxFuture<'_, Option<WeeklyAvailability>, TutoriaError>;

    /// Replace the whole weekly schedule.
    fn replace(
        &self,
        tutor_id: &str,
        weekly: WeeklyAvailability,
    ) -> BoxFuture<'_, WeeklyAvailability, TutoriaError>;

    /// Update a single weekday, returning the resulting schedule.
    fn upsert_day(
        &self,
        tutor_id: &str,
        weekday: &str,
        window: DayWindow,
    ) -> BoxFuture<'_, WeeklyAvailability, TutoriaError>;
}

/// In-memory schedule store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleRepository {
    inner: Arc<Mutex<HashMap<String, WeeklyAvailability>>>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, WeeklyAvailability>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ScheduleRepository for InMemoryScheduleRepository {
    fn fetch(&self, tutor_id: &str) -> BoxFuture<'_, Option<WeeklyAvailability>, TutoriaError> {
        let tutor_id = tutor_id.to_string();
        Box::pin(async move { Ok(self.lock().get(&tutor_id).cloned()) })
    }

    fn replace(
        &self,
        tutor_id: &str,
        weekly: WeeklyAvailability,
    ) -> BoxFuture<'_, WeeklyAvailability, TutoriaError> {
        let tutor_id = tutor_id.to_string();
        Box::pin(async move {
            self.lock().insert(tutor_id, weekly.clone());
            Ok(weekly)
        })
    }

    fn upsert_day(
        &self,
        tutor_id: &str,
        weekday: &str,
        window: DayWindow,
    ) -> BoxFuture<'_, WeeklyAvailability, TutoriaError> {
        let tutor_id = tutor_id.to_string();
        let weekday = weekday.to_string();
        Box::pin(async move {
            let mut schedules = self.lock();
            let weekly = schedules.entry(tutor_id).or_default();
            weekly.set_day(&weekday, window);
            Ok(weekly.clone())
        })
    }
}
