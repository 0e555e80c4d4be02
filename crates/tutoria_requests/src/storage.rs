// --- File: crates/tutoria_requests/src/storage.rs ---
//! Storage seam for session requests.

use crate::logic::SessionRequest;
use std::sync::{Arc, Mutex};
use tutoria_common::services::BoxFuture;
use tutoria_common::TutoriaError;

/// Repository for session requests.
pub trait RequestRepository: Send + Sync {
    fn create(&self, request: SessionRequest) -> BoxFuture<'_, SessionRequest, TutoriaError>;

    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<SessionRequest>, TutoriaError>;

    /// The tutor's inbox, newest first.
    fn list_for_tutor(&self, tutor_id: &str) -> BoxFuture<'_, Vec<SessionRequest>, TutoriaError>;

    /// Persist a resolved request. Errors when the id is unknown.
    fn update(&self, request: SessionRequest) -> BoxFuture<'_, SessionRequest, TutoriaError>;
}

/// In-memory request store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRequestRepository {
    inner: Arc<Mutex<Vec<SessionRequest>>>,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SessionRequest>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RequestRepository for InMemoryRequestRepository {
    fn create(&self, request: SessionRequest) -> BoxFuture<'_, SessionRequest, TutoriaError> {
        Box::pin(async move {
            self.lock().push(request.clone());
            Ok(request)
        })
    }

    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<SessionRequest>, TutoriaError> {
        let id = id.to_string();
        Box::pin(async move {
            Ok(self
                .lock()
                .iter()
                .find(|request| request.id == id)
                .cloned())
        })
    }

    fn list_for_tutor(&self, tutor_id: &str) -> BoxFuture<'_, Vec<SessionRequest>, TutoriaError> {
        let tutor_id = tutor_id.to_string();
        Box::pin(async move {
            let mut requests: Vec<SessionRequest> = self
                .lock()
                .iter()
                .filter(|request| request.tutor_id == tutor_id)
                .cloned()
                .collect();
            requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(requests)
        })
    }

    fn update(&self, request: SessionRequest) -> BoxFuture<'_, SessionRequest, TutoriaError> {
        Box::pin(async move {
            let mut requests = self.lock();
            match requests.iter_mut().find(|stored| stored.id == request.id) {
                Some(stored) => {
                    *stored = request.clone();
                    Ok(request)
                }
                None => Err(TutoriaError::NotFoundError(format!(
                    "No request with id {}",
                    request.id
                ))),
            }
        })
    }
}
