use crate::modules::users::adapters::outbound::registry_in_memory::InMemoryUserRegistry;
use crate::modules::users::core::ports::UserRegistry;
use crate::modules::users::core::profile::{ListingShape, RegistryProfile};
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::create_user::handler::CreateUserHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn UserRegistry>,
    pub create_handler: Arc<CreateUserHandler<dyn UserRegistry>>,
    pub listing: ListingShape,
}

impl AppState {
    /// Wires a fresh in memory registry seeded by `profile`.
    pub fn from_profile(profile: &RegistryProfile) -> Self {
        Self::with_seed(profile, profile.seed())
    }

    /// Same wiring as `from_profile`, but with a caller-supplied seed set.
    pub fn with_seed(profile: &RegistryProfile, seed: Vec<User>) -> Self {
        let registry: Arc<dyn UserRegistry> =
            Arc::new(InMemoryUserRegistry::new(seed, profile.id_scheme));
        let create_handler = Arc::new(CreateUserHandler::new(registry.clone(), profile.email));
        Self {
            registry,
            create_handler,
            listing: profile.listing,
        }
    }
}
