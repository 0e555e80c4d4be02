// --- File: crates/tutoria_ratings/src/storage.rs ---
//! Storage seam for ratings.

use crate::logic::Rating;
use std::sync::{Arc, Mutex};
use tutoria_common::services::BoxFuture;
use tutoria_common::TutoriaError;

/// Repository for ratings.
pub trait RatingRepository: Send + Sync {
    fn create(&self, rating: Rating) -> BoxFuture<'_, Rating, TutoriaError>;

    /// One rating per (session, student); used to reject duplicates.
    fn find_for_session(
        &self,
        session_id: i64,
        student_id: &str,
    ) -> BoxFuture<'_, Option<Rating>, TutoriaError>;

    /// All ratings a tutor received, newest first.
    fn list_for_tutor(&self, tutor_id: &str) -> BoxFuture<'_, Vec<Rating>, TutoriaError>;

    /// All ratings a student gave, newest first.
    fn list_for_student(&self, student_id: &str) -> BoxFuture<'_, Vec<Rating>, TutoriaError>;

    /// Bump the helpful counter, returning the updated rating, or None when
    /// the id is unknown.
    fn increment_helpful(&self, id: &str) -> BoxFuture<'_, Option<Rating>, TutoriaError>;
}

/// In-memory rating store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRatingRepository {
    inner: Arc<Mutex<Vec<Rating>>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Rating>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn sorted<F>(&self, predicate: F) -> Vec<Rating>
    where
        F: Fn(&Rating) -> bool,
    {
        let mut ratings: Vec<Rating> = self.lock().iter().filter(|r| predicate(r)).cloned().collect();
        ratings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ratings
    }
}

impl RatingRepository for InMemoryRatingRepository {
    fn create(&self, rating: Rating) -> BoxFuture<'_, Rating, TutoriaError> {
        Box::pin(async move {
            self.lock().push(rating.clone());
            Ok(rating)
        })
    }

    fn find_for_session(
        &self,
        session_id: i64,
        student_id: &str,
    ) -> BoxFuture<'_, Option<Rating>, TutoriaError> {
        let student_id = student_id.to_string();
        Box::pin(async move {
            Ok(self
                .lock()
                .iter()
                .find(|rating| rating.session_id == session_id && rating.student_id == student_id)
                .cloned())
        })
    }

    fn list_for_tutor(&self, tutor_id: &str) -> BoxFuture<'_, Vec<Rating>, TutoriaError> {
        let tutor_id = tutor_id.to_string();
        Box::pin(async move { Ok(self.sorted(|rating| rating.tutor_id == tutor_id)) })
    }

    fn list_for_student(&self, student_id: &str) -> BoxFuture<'_, Vec<Rating>, TutoriaError> {
        let student_id = student_id.to_string();
        Box::pin(async move { Ok(self.sorted(|rating| rating.student_id == student_id)) })
    }

    fn increment_helpful(&self, id: &str) -> BoxFuture<'_, Option<Rating>, TutoriaError> {
        let id = id.to_string();
        Box::pin(async move {
            let mut ratings = self.lock();
            Ok(ratings.iter_mut().find(|rating| rating.id == id).map(|rating| {
                rating.helpful_count += 1;
                rating.clone()
            }))
        })
    }
}
