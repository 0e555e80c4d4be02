//! Repository modules for database access
//!
//! This module contains repository traits and implementations for different
//! database entities.

pub mod session;
pub mod session_factory;
pub mod session_memory;
pub mod session_sql;

// Re-export the session repository types for ease of use
pub use session::{Session, SessionRepository};
pub use session_factory::SessionStore;
pub use session_memory::InMemorySessionRepository;
pub use session_sql::SqlSessionRepository;
