use serde::Serialize;

use crate::modules::users::core::profile::ListingShape;
use crate::modules::users::core::user::User;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserListResponse {
    Bare(Vec<User>),
    Wrapped { users: Vec<User> },
}

impl UserListResponse {
    pub fn shaped(listing: ListingShape, users: Vec<User>) -> Self {
        match listing {
            ListingShape::Bare => UserListResponse::Bare(users),
            ListingShape::Wrapped => UserListResponse::Wrapped { users },
        }
    }
}
