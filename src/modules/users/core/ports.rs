// Ports describe what the use cases need from a user registry, without
// committing to where the users live. The in memory adapter is the only
// implementation.

use crate::modules::users::core::user::{NewUser, User};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("user {id} not found")]
    NotFound { id: i64 },
}

#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Every stored user, in insertion order.
    async fn list(&self) -> Vec<User>;

    async fn get_by_id(&self, id: i64) -> Result<User, RegistryError>;

    /// Assigns the next identifier, appends the user and returns the stored record.
    async fn create(&self, new_user: NewUser) -> User;
}
