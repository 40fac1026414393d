use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, Transport},
        error::{Error, ValidationError},
        store::{form::FormStatus, session::Session},
    },
    model::user::TokenResponse,
};

pub static LOGIN_FAILED: &str = "Login failed. Check your login and password.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.login.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(())
    }
}

/// Validates the form and exchanges the credentials for a token.
pub async fn sign_in<T: Transport>(
    api: &ApiClient<T>,
    form: &LoginForm,
) -> Result<TokenResponse, Error> {
    form.validate()?;

    Ok(api.login(form.login.trim(), &form.password).await?)
}

/// Applies the outcome of [`sign_in`].
///
/// A token is stored only on success; returns true when the page should navigate home.
pub fn finish_sign_in(
    result: Result<TokenResponse, Error>,
    status: &mut FormStatus,
    session: &mut Session,
) -> bool {
    match result {
        Ok(response) => {
            session.login(response.access_token);
            status.finish();
            true
        }
        Err(Error::ValidationError(err)) => {
            status.fail(err.to_string());
            false
        }
        Err(err) => {
            tracing::warn!("Login failed: {}", err);
            status.fail(LOGIN_FAILED);
            false
        }
    }
}
