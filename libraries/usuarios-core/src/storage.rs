//! Storage trait for the user directory

use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use async_trait::async_trait;

/// Backing store for user records
///
/// Implementations keep users in insertion order and must make each call
/// atomic with respect to the others.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users in insertion order
    async fn get_all(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Append a new user under the next free id
    async fn create(&self, user: CreateUser) -> Result<User>;

    /// Rename a user in place
    ///
    /// Returns `DirectoryError::UserNotFound` if the id is absent.
    async fn update(&self, id: UserId, user: UpdateUser) -> Result<User>;

    /// Remove a user and return the removed record
    ///
    /// Returns `DirectoryError::UserNotFound` if the id is absent.
    async fn delete(&self, id: UserId) -> Result<User>;

    /// Number of users currently held
    async fn count(&self) -> Result<usize> {
        Ok(self.get_all().await?.len())
    }
}
