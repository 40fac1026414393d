use crate::{
    client::{
        api::{ApiClient, Transport},
        error::{Error, ValidationError},
        store::employee_form::optional,
    },
    model::user::{NewUser, User},
};

pub static REGISTER_FAILED: &str = "Registration failed. A user with this login may already exist.";
pub static REGISTERED: &str = "Registration successful. You can now sign in.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub login: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Builds the registration payload, using the login as the full name.
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.login.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let login = self.login.trim().to_string();
        Ok(NewUser {
            full_name: Some(login.clone()),
            login,
            password: self.password.clone(),
            email: optional(&self.email),
            department: None,
        })
    }
}

/// Message shown for a failed registration.
pub fn failure_message(err: &Error) -> String {
    match err {
        Error::ValidationError(err) => err.to_string(),
        _ => REGISTER_FAILED.to_string(),
    }
}

/// Validates the form and registers the account; a mismatch never reaches the backend.
pub async fn register<T: Transport>(api: &ApiClient<T>, form: &RegisterForm) -> Result<User, Error> {
    let user = form.validate()?;

    Ok(api.register(&user).await?)
}
