//! Privileged account creation, used by the administration and management pages.

use crate::{
    client::{error::ValidationError, store::employee_form::optional},
    model::user::{AccountKind, NewUser},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub login: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub department: String,
}

impl AccountForm {
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        if self.login.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(NewUser {
            login: self.login.trim().to_string(),
            password: self.password.clone(),
            email: optional(&self.email),
            full_name: optional(&self.full_name),
            department: optional(&self.department),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Page texts for each kind of account.
pub trait AccountKindText {
    fn page_title(self) -> &'static str;
    fn created_message(self) -> &'static str;
    fn failed_message(self) -> &'static str;
}

impl AccountKindText for AccountKind {
    fn page_title(self) -> &'static str {
        match self {
            Self::Manager => "Create department manager",
            Self::User => "Create user",
        }
    }

    fn created_message(self) -> &'static str {
        match self {
            Self::Manager => "Department manager created",
            Self::User => "User created",
        }
    }

    fn failed_message(self) -> &'static str {
        match self {
            Self::Manager => "Failed to create the manager. Check the data and try again.",
            Self::User => "Failed to create the user. Check the data and try again.",
        }
    }
}
