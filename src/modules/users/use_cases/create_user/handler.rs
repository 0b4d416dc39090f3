use crate::modules::users::core::ports::UserRegistry;
use crate::modules::users::core::profile::EmailPolicy;
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::modules::users::use_cases::create_user::decide::decide_create;
use crate::modules::users::use_cases::create_user::decision::{Decision, ValidationError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub struct CreateUserHandler<TRegistry>
where
    TRegistry: UserRegistry + ?Sized + 'static,
{
    registry: Arc<TRegistry>,
    email_policy: EmailPolicy,
}

impl<TRegistry> CreateUserHandler<TRegistry>
where
    TRegistry: UserRegistry + ?Sized + 'static,
{
    pub fn new(registry: Arc<TRegistry>, email_policy: EmailPolicy) -> Self {
        Self {
            registry,
            email_policy,
        }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        match decide_create(command, self.email_policy) {
            Decision::Accepted { new_user } => Ok(self.registry.create(new_user).await),
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
