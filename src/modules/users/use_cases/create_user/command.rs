use serde::Deserialize;

/// A create request as it arrives. Both fields are optional here; `decide_create`
/// turns it into a `NewUser` or rejects it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CreateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
