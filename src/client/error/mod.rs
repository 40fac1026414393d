//! Error types for the registry frontend.
//!
//! Every failure is handled by the page that caused it and rendered as an inline
//! message; none of these errors is fatal to the application.

pub mod api;
pub mod config;
pub mod token;
pub mod validation;

use thiserror::Error;

pub use self::{api::ApiError, config::ConfigError, token::TokenError, validation::ValidationError};

/// Aggregate error for operations that validate input and then call the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Network, status or decoding failure while talking to the backend.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Input rejected before any request was sent.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
}

impl Error {
    /// Message to show to the user.
    ///
    /// Validation errors are shown verbatim, backend errors show the backend's detail when
    /// one was provided and `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::ValidationError(err) => err.to_string(),
            Self::ApiError(err) => err.user_message(fallback),
        }
    }
}
