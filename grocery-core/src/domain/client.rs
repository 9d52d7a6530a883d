//! Client domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{Entity, Model};
use super::result::Error;

/// Authorization role of a client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    None,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Role::None),
            "admin" => Ok(Role::Admin),
            other => Err(Error::validation(format!("unknown role: {}", other))),
        }
    }
}

/// A registered user of the grocery app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub model: Model,
    pub email_address: String,
    /// Salted password hash in `<salt>.<hash>` form, never the plain password
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
}

impl Client {
    /// Create a client with the default role
    pub fn new(
        id: i32,
        name: impl Into<String>,
        email_address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_role(id, name, email_address, password, Role::default())
    }

    pub fn with_role(
        id: i32,
        name: impl Into<String>,
        email_address: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            model: Model::new(id, name),
            email_address: email_address.into(),
            password: password.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Entity for Client {
    fn model(&self) -> &Model {
        &self.model
    }
}
