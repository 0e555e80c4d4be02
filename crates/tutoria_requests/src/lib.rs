// --- File: crates/tutoria_requests/src/lib.rs ---
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod storage;

pub use logic::{RequestError, RequestStatus, SessionRequest};
pub use storage::{InMemoryRequestRepository, RequestRepository};

#[cfg(test)]
mod handlers_test;
