//! In-memory implementation of the session repository
//!
//! Used in tests and as the runtime fallback when no database is configured.
//! Shares the SessionRepository contract with the SQL implementation.

use crate::error::DbError;
use crate::repositories::session::{Session, SessionRepository, SessionStatus, UserRole};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    sessions: Vec<Session>,
    next_id: i64,
}

/// In-memory implementation of the session repository
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    inner: Arc<Mutex<Inner>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Lock poisoning only happens if a holder panicked; propagate the data anyway.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn create(&self, mut session: Session) -> Result<Session, DbError> {
        let mut inner = self.lock();
        inner.next_id += 1;
        session.id = Some(inner.next_id);
        debug!("Storing session {:?} in memory", session.id);
        inner.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>, DbError> {
        let inner = self.lock();
        Ok(inner.sessions.iter().find(|s| s.id == Some(id)).cloned())
    }

    async fn list_for_user(&self, user_id: &str, role: UserRole) -> Result<Vec<Session>, DbError> {
        let inner = self.lock();
        let mut sessions: Vec<Session> = inner
            .sessions
            .iter()
            .filter(|s| match role {
                UserRole::Tutor => s.tutor_id == user_id,
                UserRole::Student => s.student_id == user_id,
            })
            .cloned()
            .collect();
        sessions.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));
        Ok(sessions)
    }

    async fn update_status(
        &self,
        id: i64,
        status: SessionStatus,
    ) -> Result<Option<Session>, DbError> {
        let mut inner = self.lock();
        match inner.sessions.iter_mut().find(|s| s.id == Some(id)) {
            Some(session) => {
                session.status = status;
                session.updated_at = Some(chrono::Utc::now());
                Ok(Some(session.clone()))
            }
            None => Ok(None),
        }
    }

    async fn booked_dates(
        &self,
        tutor_id: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<String>, DbError> {
        let inner = self.lock();
        let dates: BTreeSet<String> = inner
            .sessions
            .iter()
            .filter(|s| {
                s.tutor_id == tutor_id
                    && matches!(
                        s.status,
                        SessionStatus::Confirmed | SessionStatus::InProgress
                    )
                    && s.date.as_str() >= from
                    && s.date.as_str() <= to
            })
            .map(|s| s.date.clone())
            .collect();
        Ok(dates.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutoria_common::models::SessionType;

    fn sample(tutor: &str, student: &str, date: &str, status: SessionStatus) -> Session {
        let mut session = Session::new(
            tutor.to_string(),
            student.to_string(),
            date.to_string(),
            "10:00".to_string(),
            60,
            SessionType::Online,
            None,
            25.0,
        );
        session.status = status;
        session
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemorySessionRepository::new();
        let a = repo
            .create(sample("t1", "s1", "2026-09-01", SessionStatus::Pending))
            .await
            .unwrap();
        let b = repo
            .create(sample("t1", "s2", "2026-09-02", SessionStatus::Pending))
            .await
            .unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[tokio::test]
    async fn booked_dates_only_counts_confirmed_and_in_progress() {
        let repo = InMemorySessionRepository::new();
        repo.create(sample("t1", "s1", "2026-09-01", SessionStatus::Confirmed))
            .await
            .unwrap();
        repo.create(sample("t1", "s2", "2026-09-02", SessionStatus::Pending))
            .await
            .unwrap();
        repo.create(sample("t1", "s3", "2026-09-03", SessionStatus::Cancelled))
            .await
            .unwrap();
        repo.create(sample("t2", "s4", "2026-09-04", SessionStatus::Confirmed))
            .await
            .unwrap();

        let dates = repo
            .booked_dates("t1", "2026-09-01", "2026-09-30")
            .await
            .unwrap();
        assert_eq!(dates, vec!["2026-09-01".to_string()]);
    }

    #[tokio::test]
    async fn list_for_user_filters_by_role() {
        let repo = InMemorySessionRepository::new();
        repo.create(sample("t1", "s1", "2026-09-02", SessionStatus::Pending))
            .await
            .unwrap();
        repo.create(sample("t1", "s2", "2026-09-01", SessionStatus::Pending))
            .await
            .unwrap();

        let as_tutor = repo.list_for_user("t1", UserRole::Tutor).await.unwrap();
        assert_eq!(as_tutor.len(), 2);
        // Ordered by date
        assert_eq!(as_tutor[0].date, "2026-09-01");

        let as_student = repo.list_for_user("s1", UserRole::Student).await.unwrap();
        assert_eq!(as_student.len(), 1);
    }

    #[tokio::test]
    async fn update_status_on_missing_session_returns_none() {
        let repo = InMemorySessionRepository::new();
        let updated = repo
            .update_status(42, SessionStatus::Confirmed)
            .await
            .unwrap();
        assert!(updated.is_none());
    }
}
