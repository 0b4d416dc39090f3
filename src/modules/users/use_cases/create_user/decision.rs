use std::fmt;

use crate::modules::users::core::user::NewUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => f.write_str("Name"),
            RequiredField::Email => f.write_str("Email"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(RequiredField),
}

pub enum Decision {
    Accepted { new_user: NewUser },
    Rejected { reason: ValidationError },
}
