//! Database integration for Tutoria
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library. It supports SQLite, PostgreSQL,
//! and MySQL databases through feature flags, plus an in-memory session store for
//! tests and database-less deployments.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tutoria_config::AppConfig;
//! use tutoria_db::SessionStore;
//!
//! async fn setup_store() -> Result<SessionStore, Box<dyn std::error::Error>> {
//!     let config = Arc::new(AppConfig::default());
//!     let store = SessionStore::from_app_config(&config).await?;
//!     Ok(store)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;
pub mod repository;

// Re-export the client and repository traits for ease of use
pub use client::DbClient;
pub use error::DbError;
pub use repository::{Repository, RepositoryFactory};

// Re-export the repositories module components for ease of use
pub use repositories::{
    InMemorySessionRepository, Session, SessionRepository, SessionStore, SqlSessionRepository,
};
