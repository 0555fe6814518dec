/// In-memory user store
use async_trait::async_trait;
use tokio::sync::RwLock;
use usuarios_core::{
    error::{DirectoryError, Result},
    storage::UserStore,
    types::{CreateUser, UpdateUser, User, UserId},
};

use crate::seed;

/// Ordered collection plus the next id to hand out
#[derive(Debug)]
struct Directory {
    users: Vec<User>,
    next_id: u64,
}

impl Directory {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// User store backed by a `Vec` behind a read/write lock.
///
/// Ids come from a counter that only moves forward, so an id freed by a
/// delete is never handed out again.
#[derive(Debug)]
pub struct MemoryUserStore {
    inner: RwLock<Directory>,
}

impl MemoryUserStore {
    /// Create a store holding `users`, in the given order.
    ///
    /// The counter starts one past the largest id present.
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id.get()).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Directory { users, next_id }),
        }
    }

    /// Create an empty store; the first id handed out is 1
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Create a store holding the seed directory
    pub fn seeded() -> Self {
        Self::new(seed::default_users())
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_all(&self) -> Result<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>> {
        let dir = self.inner.read().await;
        Ok(dir.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: CreateUser) -> Result<User> {
        let mut dir = self.inner.write().await;
        let id = UserId::new(dir.next_id);
        dir.next_id += 1;

        let record = User::new(id, user.name);
        dir.users.push(record.clone());
        tracing::debug!(%id, "user created");
        Ok(record)
    }

    async fn update(&self, id: UserId, user: UpdateUser) -> Result<User> {
        let mut dir = self.inner.write().await;
        let index = dir
            .position(id)
            .ok_or_else(|| DirectoryError::user_not_found(id.to_string()))?;

        let record = &mut dir.users[index];
        record.name = user.name;
        tracing::debug!(%id, "user renamed");
        Ok(record.clone())
    }

    async fn delete(&self, id: UserId) -> Result<User> {
        let mut dir = self.inner.write().await;
        let index = dir
            .position(id)
            .ok_or_else(|| DirectoryError::user_not_found(id.to_string()))?;

        let removed = dir.users.remove(index);
        tracing::debug!(%id, "user deleted");
        Ok(removed)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.inner.read().await.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counter_starts_after_highest_seed_id() {
        let store = MemoryUserStore::new(vec![
            User::new(UserId::new(7), "Siete"),
            User::new(UserId::new(2), "Dos"),
        ]);
        let created = store
            .create(CreateUser {
                name: "Ocho".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, UserId::new(8));
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = MemoryUserStore::empty();
        let created = store
            .create(CreateUser {
                name: "Uno".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, UserId::new(1));
    }
}
