use crate::modules::users::core::ports::{RegistryError, UserRegistry};
use crate::modules::users::core::profile::{IdScheme, RegistryProfile};
use crate::modules::users::core::user::{NewUser, User};
use tokio::sync::RwLock;

pub struct InMemoryUserRegistry {
    users: RwLock<Vec<User>>,
    id_scheme: IdScheme,
}

impl InMemoryUserRegistry {
    pub fn new(seed: Vec<User>, id_scheme: IdScheme) -> Self {
        Self {
            users: RwLock::new(seed),
            id_scheme,
        }
    }

    pub fn from_profile(profile: &RegistryProfile) -> Self {
        Self::new(profile.seed(), profile.id_scheme)
    }
}

#[async_trait::async_trait]
impl UserRegistry for InMemoryUserRegistry {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn get_by_id(&self, id: i64) -> Result<User, RegistryError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    async fn create(&self, new_user: NewUser) -> User {
        let mut guard = self.users.write().await;
        let user = new_user.into_user(self.id_scheme.next_id(&guard));
        guard.push(user.clone());
        user
    }
}
