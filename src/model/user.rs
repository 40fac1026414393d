use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a signed in user as reported by the backend.
///
/// The role only decides which navigation links are shown; every permission check
/// happens on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    /// Parses a role claim, treating missing or unknown values as a regular user.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim.map(str::trim) {
            Some("admin") => Self::Admin,
            Some("manager") => Self::Manager,
            _ => Self::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from_claim(Some(&self.role))
    }

    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }

    /// Label used in the department manager selector.
    pub fn option_label(&self) -> String {
        let detail = [self.full_name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .unwrap_or("No name");

        format!("{} ({})", self.login, detail)
    }
}

/// Payload for registration and for privileged account creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub login: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Which privileged account creation endpoint a form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Created by administrators through `/auth/create-manager`.
    Manager,
    /// Created by department managers through `/auth/create-user`.
    User,
}

impl AccountKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Manager => "/auth/create-manager",
            Self::User => "/auth/create-user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
