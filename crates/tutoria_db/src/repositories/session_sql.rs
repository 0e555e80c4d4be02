//! SQL implementation of the session repository
//!
//! This module provides a SQL implementation of the SessionRepository trait,
//! portable across the SQLx Any driver backends.

use crate::error::DbError;
use crate::repositories::session::{Session, SessionRepository, SessionStatus, UserRole};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};
use tutoria_common::models::SessionType;

/// SQL implementation of the session repository
#[derive(Debug, Clone)]
pub struct SqlSessionRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlSessionRepository {
    /// Create a new SQL session repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn session_from_row(row: &AnyRow) -> Session {
    let session_type: String = row.try_get("session_type").unwrap_or_default();
    let status: String = row.try_get("status").unwrap_or_default();
    Session {
        id: row.try_get("id").ok(),
        tutor_id: row.try_get("tutor_id").unwrap_or_default(),
        student_id: row.try_get("student_id").unwrap_or_default(),
        date: row.try_get("date").unwrap_or_default(),
        start_time: row.try_get("start_time").unwrap_or_default(),
        duration_minutes: row.try_get("duration_minutes").unwrap_or_default(),
        session_type: session_type.parse().unwrap_or(SessionType::Online),
        student_notes: row.try_get("student_notes").ok(),
        price: row.try_get("price").unwrap_or_default(),
        status: status.parse().unwrap_or(SessionStatus::Pending),
        created_at: None, // DateTime<Utc> doesn't implement Decode for sqlx::Any
        updated_at: None, // DateTime<Utc> doesn't implement Decode for sqlx::Any
    }
}

const SESSION_COLUMNS: &str = "id, tutor_id, student_id, date, start_time, duration_minutes, \
                               session_type, student_notes, price, status";

impl SessionRepository for SqlSessionRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing session schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tutor_id TEXT NOT NULL,
                student_id TEXT NOT NULL,
                date TEXT NOT NULL,
                start_time TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                session_type TEXT NOT NULL,
                student_notes TEXT,
                price REAL NOT NULL,
                status TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Session schema initialized successfully");
        Ok(())
    }

    async fn create(&self, session: Session) -> Result<Session, DbError> {
        debug!(
            "Creating session for tutor {} on {}",
            session.tutor_id, session.date
        );

        let query = format!(
            r#"
            INSERT INTO sessions
                (tutor_id, student_id, date, start_time, duration_minutes,
                 session_type, student_notes, price, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SESSION_COLUMNS}
        "#
        );

        let row = sqlx::query(&query)
            .bind(&session.tutor_id)
            .bind(&session.student_id)
            .bind(&session.date)
            .bind(&session.start_time)
            .bind(session.duration_minutes)
            .bind(session.session_type.to_string())
            .bind(&session.student_notes)
            .bind(session.price)
            .bind(session.status.to_string())
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert session: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        info!("Session created successfully");
        Ok(session_from_row(&row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>, DbError> {
        debug!("Finding session {}", id);

        let query =
            format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1");

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find session: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.as_ref().map(session_from_row))
    }

    async fn list_for_user(&self, user_id: &str, role: UserRole) -> Result<Vec<Session>, DbError> {
        debug!("Listing sessions for {} {}", role, user_id);

        let query = match role {
            UserRole::Tutor => format!(
                "SELECT {SESSION_COLUMNS} FROM sessions WHERE tutor_id = $1 \
                 ORDER BY date, start_time"
            ),
            UserRole::Student => format!(
                "SELECT {SESSION_COLUMNS} FROM sessions WHERE student_id = $1 \
                 ORDER BY date, start_time"
            ),
        };

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list sessions: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(session_from_row).collect())
    }

    async fn update_status(
        &self,
        id: i64,
        status: SessionStatus,
    ) -> Result<Option<Session>, DbError> {
        debug!("Setting session {} status to {}", id, status);

        let query = r#"
            UPDATE sessions
            SET status = $1, updated_at = CURRENT_TIMESTAMP
            WHERE id = $2
        "#;

        let result = sqlx::query(query)
            .bind(status.to_string())
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update session status: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn booked_dates(
        &self,
        tutor_id: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<String>, DbError> {
        debug!("Fetching booked dates for tutor {}", tutor_id);

        let query = r#"
            SELECT DISTINCT date FROM sessions
            WHERE tutor_id = $1
              AND status IN ('confirmed', 'in_progress')
              AND date >= $2 AND date <= $3
            ORDER BY date
        "#;

        let rows = sqlx::query(query)
            .bind(tutor_id)
            .bind(from)
            .bind(to)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to fetch booked dates: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows
            .into_iter()
            .map(|row| row.try_get("date").unwrap_or_default())
            .collect())
    }
}
