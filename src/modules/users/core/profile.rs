//! Registry profiles.
//!
//! A profile bundles the seed set, how the list endpoint shapes its body, how
//! new identifiers are assigned and whether an email is mandatory.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::modules::users::core::seed::{directory_seed, roster_seed};
use crate::modules::users::core::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingShape {
    /// `[{...}, {...}]`
    Bare,
    /// `{"users": [{...}, {...}]}`
    Wrapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    LengthPlusOne,
    LastPlusOne,
}

impl IdScheme {
    /// Never returns an id already in `users`, even for a seed that is not
    /// numbered contiguously from 1.
    pub fn next_id(self, users: &[User]) -> i64 {
        let candidate = match self {
            IdScheme::LengthPlusOne => users.len() as i64 + 1,
            IdScheme::LastPlusOne => users.last().map_or(1, |u| u.id + 1),
        };
        let highest = users.iter().map(|u| u.id).max().unwrap_or(0);
        candidate.max(highest + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPolicy {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileName {
    Directory,
    Roster,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown registry profile `{0}`, expected `directory` or `roster`")]
pub struct UnknownProfile(pub String);

impl FromStr for ProfileName {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directory" => Ok(ProfileName::Directory),
            "roster" => Ok(ProfileName::Roster),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileName::Directory => f.write_str("directory"),
            ProfileName::Roster => f.write_str("roster"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryProfile {
    pub name: ProfileName,
    pub listing: ListingShape,
    pub id_scheme: IdScheme,
    pub email: EmailPolicy,
}

impl RegistryProfile {
    /// Users with an email address, listed as a bare array.
    pub fn directory() -> Self {
        Self {
            name: ProfileName::Directory,
            listing: ListingShape::Bare,
            id_scheme: IdScheme::LengthPlusOne,
            email: EmailPolicy::Required,
        }
    }

    /// Name-only users, listed inside a `users` wrapper.
    pub fn roster() -> Self {
        Self {
            name: ProfileName::Roster,
            listing: ListingShape::Wrapped,
            id_scheme: IdScheme::LastPlusOne,
            email: EmailPolicy::Optional,
        }
    }

    pub fn seed(&self) -> Vec<User> {
        match self.name {
            ProfileName::Directory => directory_seed(),
            ProfileName::Roster => roster_seed(),
        }
    }
}

impl From<ProfileName> for RegistryProfile {
    fn from(name: ProfileName) -> Self {
        match name {
            ProfileName::Directory => RegistryProfile::directory(),
            ProfileName::Roster => RegistryProfile::roster(),
        }
    }
}
