//! Repository traits for database access
//!
//! This module defines traits for database repositories that can be implemented
//! by different storage backends. This allows the tutoria_db crate to be
//! completely agnostic of the specific database implementation.

use std::error::Error;
use std::fmt::Debug;

/// A trait for database repositories
///
/// This trait defines the basic operations that all database repositories
/// should support. It is generic over the entity type and the error type.
pub trait Repository<T, E>
where
    T: Clone + Debug,
    E: Error + Debug,
{
    /// Create a new entity in the repository
    fn create(&self, entity: T) -> impl std::future::Future<Output = Result<T, E>> + Send;

    /// Read an entity from the repository by ID
    fn read<I>(&self, id: I) -> impl std::future::Future<Output = Result<Option<T>, E>> + Send
    where
        I: Debug + Send + Sync;

    /// Update an entity in the repository
    fn update(&self, entity: T) -> impl std::future::Future<Output = Result<T, E>> + Send;

    /// Delete an entity from the repository by ID
    ///
    /// Returns `true` if the entity was deleted, `false` if it was not found.
    fn delete<I>(&self, id: I) -> impl std::future::Future<Output = Result<bool, E>> + Send
    where
        I: Debug + Send + Sync;
}

/// A trait for database repository factories
///
/// This trait defines a factory for creating repository instances.
/// It is generic over the repository type and the configuration type.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance from the given configuration.
    fn create_repository(&self, config: C) -> R;
}
