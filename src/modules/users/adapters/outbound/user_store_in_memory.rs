// In memory implementation of the UserStore port.
//
// Purpose
// - Hold the process-wide user list; nothing survives a restart.
//
// Responsibilities
// - Preserve insertion order.
// - Serialize every read and mutation through one lock.

use crate::modules::users::core::ports::{UpsertOutcome, UserStore, UserStoreError};
use crate::modules::users::core::user::{User, find_index};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    is_offline: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), UserStoreError> {
        if self.is_offline {
            return Err(UserStoreError::Backend("User store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        self.ensure_online()?;
        Ok(self.users.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<User, UserStoreError> {
        self.ensure_online()?;
        let guard = self.users.read().await;
        find_index(&guard, id)
            .map(|index| guard[index].clone())
            .ok_or(UserStoreError::NotFound { id })
    }

    async fn add(&self, user: User) -> Result<Vec<User>, UserStoreError> {
        self.ensure_online()?;
        let mut guard = self.users.write().await;
        guard.push(user);
        Ok(guard.clone())
    }

    async fn upsert(&self, user: User) -> Result<(UpsertOutcome, Vec<User>), UserStoreError> {
        self.ensure_online()?;
        let mut guard = self.users.write().await;
        let outcome = match find_index(&guard, user.id) {
            Some(index) => {
                guard[index] = user;
                UpsertOutcome::Updated
            }
            None => {
                guard.push(user);
                UpsertOutcome::Inserted
            }
        };
        Ok((outcome, guard.clone()))
    }

    async fn delete(&self, id: i64) -> Result<Vec<User>, UserStoreError> {
        self.ensure_online()?;
        let mut guard = self.users.write().await;
        let index = find_index(&guard, id).ok_or(UserStoreError::NotFound { id })?;
        guard.remove(index);
        Ok(guard.clone())
    }
}
