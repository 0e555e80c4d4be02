//! Factory for creating session repositories
//!
//! Picks the SQL implementation when a database is configured, and the
//! in-memory implementation otherwise, behind a single dispatch type so the
//! backend wires one concrete store.

use crate::error::DbError;
use crate::repositories::session::{Session, SessionRepository, SessionStatus, UserRole};
use crate::repositories::session_memory::InMemorySessionRepository;
use crate::repositories::session_sql::SqlSessionRepository;
use crate::DbClient;
use std::sync::Arc;
use tracing::{info, warn};
use tutoria_config::AppConfig;

/// Runtime-selected session store.
#[derive(Debug, Clone)]
pub enum SessionStore {
    Sql(SqlSessionRepository),
    Memory(InMemorySessionRepository),
}

impl SessionStore {
    /// Build a session store from the application configuration and
    /// initialize its schema.
    pub async fn from_app_config(config: &Arc<AppConfig>) -> Result<Self, DbError> {
        let store = match config.database.as_ref() {
            Some(db_config) => {
                info!("Using SQL session store at {}", db_config.url);
                let client = DbClient::from_config(db_config).await?;
                SessionStore::Sql(SqlSessionRepository::new(client))
            }
            None => {
                warn!("No database configured, sessions are stored in memory");
                SessionStore::Memory(InMemorySessionRepository::new())
            }
        };
        store.init_schema().await?;
        Ok(store)
    }
}

impl SessionRepository for SessionStore {
    async fn init_schema(&self) -> Result<(), DbError> {
        match self {
            SessionStore::Sql(repo) => repo.init_schema().await,
            SessionStore::Memory(repo) => repo.init_schema().await,
        }
    }

    async fn create(&self, session: Session) -> Result<Session, DbError> {
        match self {
            SessionStore::Sql(repo) => repo.create(session).await,
            SessionStore::Memory(repo) => repo.create(session).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>, DbError> {
        match self {
            SessionStore::Sql(repo) => repo.find_by_id(id).await,
            SessionStore::Memory(repo) => repo.find_by_id(id).await,
        }
    }

    async fn list_for_user(&self, user_id: &str, role: UserRole) -> Result<Vec<Session>, DbError> {
        match self {
            SessionStore::Sql(repo) => repo.list_for_user(user_id, role).await,
            SessionStore::Memory(repo) => repo.list_for_user(user_id, role).await,
        }
    }

    async fn update_status(
        &self,
        id: i64,
        status: SessionStatus,
    ) -> Result<Option<Session>, DbError> {
        match self {
            SessionStore::Sql(repo) => repo.update_status(id, status).await,
            SessionStore::Memory(repo) => repo.update_status(id, status).await,
        }
    }

    async fn booked_dates(
        &self,
        tutor_id: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<String>, DbError> {
        match self {
            SessionStore::Sql(repo) => repo.booked_dates(tutor_id, from, to).await,
            SessionStore::Memory(repo) => repo.booked_dates(tutor_id, from, to).await,
        }
    }
}
