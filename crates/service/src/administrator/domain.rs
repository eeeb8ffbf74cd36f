use serde::{Deserialize, Serialize};

use crate::validation::{validate_administrator, ValidationErrors};

pub use models::administrator::Role;

/// Login input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Creation payload as received; role stays a raw string until validated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdministratorInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Validated creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdministrator {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl TryFrom<AdministratorInput> for NewAdministrator {
    type Error = ValidationErrors;

    fn try_from(input: AdministratorInput) -> Result<Self, Self::Error> {
        let errors = validate_administrator(&input);
        match input.role.as_deref().map(str::parse::<Role>) {
            Some(Ok(role)) if errors.is_empty() => Ok(Self { email: input.email, password: input.password, role }),
            _ => Err(errors),
        }
    }
}

/// Stored administrator (domain view)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Administrator {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl From<models::administrator::Model> for Administrator {
    fn from(m: models::administrator::Model) -> Self {
        Self { id: m.id, email: m.email, password: m.password, role: m.role }
    }
}

/// Listing projection without the password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministratorView {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl From<&Administrator> for AdministratorView {
    fn from(a: &Administrator) -> Self {
        Self { id: a.id, email: a.email.clone(), role: a.role }
    }
}

/// Login result returned to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedAdministrator {
    pub email: String,
    pub role: Role,
    pub token: String,
}
