// Ports describe what the users module needs from storage, without implementing it.
//
// Every mutating operation hands back the full list as it stood right after
// the change, so callers never observe a snapshot from a later request.

use crate::modules::users::core::user::User;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("user not found: {id}")]
    NotFound { id: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Updated,
    Inserted,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    async fn get(&self, id: i64) -> Result<User, UserStoreError>;

    /// Appends unconditionally; duplicate ids are accepted.
    async fn add(&self, user: User) -> Result<Vec<User>, UserStoreError>;

    /// Replaces the first record with the same id in place, or appends.
    async fn upsert(&self, user: User) -> Result<(UpsertOutcome, Vec<User>), UserStoreError>;

    async fn delete(&self, id: i64) -> Result<Vec<User>, UserStoreError>;
}
