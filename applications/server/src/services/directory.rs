/// User directory service - lookup, validation, and mutation of user records
use crate::error::Result;
use serde_json::Value;
use std::sync::Arc;
use usuarios_core::{
    types::{CreateUser, UpdateUser, User, UserId},
    validation::validate_name,
    DirectoryError, UserStore,
};

/// The four directory operations exposed over HTTP.
///
/// Ids arrive exactly as they appeared in the URL; names arrive as the raw
/// JSON value of the `nombre` field so that type errors surface as
/// validation messages.
#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn UserStore>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// All users, in insertion order
    pub async fn list(&self) -> Result<Vec<User>> {
        Ok(self.store.get_all().await?)
    }

    /// Number of users currently held
    pub async fn count(&self) -> Result<usize> {
        Ok(self.store.count().await?)
    }

    /// Find a user by the id path segment
    pub async fn get(&self, raw_id: &str) -> Result<User> {
        Ok(self.find(raw_id).await?)
    }

    /// Validate `nombre` and append a new user under the next id
    pub async fn create(&self, nombre: Option<&Value>) -> Result<User> {
        let validated = validate_name(nombre);
        tracing::debug!(?nombre, valid = validated.is_ok(), "create user");

        let user = self.store.create(CreateUser { name: validated? }).await?;
        tracing::info!(id = %user.id, "Created user");
        Ok(user)
    }

    /// Rename a user.
    ///
    /// The id is checked before the name: an unknown id is reported as not
    /// found even when `nombre` is also invalid.
    pub async fn update(&self, raw_id: &str, nombre: Option<&Value>) -> Result<User> {
        let existing = self.find(raw_id).await?;
        let name = validate_name(nombre)?;

        let user = self.store.update(existing.id, UpdateUser { name }).await?;
        tracing::info!(id = %user.id, "Updated user");
        Ok(user)
    }

    /// Remove a user and return the record as it was
    pub async fn delete(&self, raw_id: &str) -> Result<User> {
        let existing = self.find(raw_id).await?;

        let removed = self.store.delete(existing.id).await?;
        tracing::info!(id = %removed.id, "Deleted user");
        Ok(removed)
    }

    async fn find(&self, raw_id: &str) -> std::result::Result<User, DirectoryError> {
        let Some(id) = UserId::parse_path(raw_id) else {
            return Err(DirectoryError::user_not_found(raw_id));
        };

        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::user_not_found(raw_id))
    }
}
