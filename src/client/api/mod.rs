//! REST client for the registry backend.
//!
//! [`ApiClient`] resolves paths against the configured base URL, attaches the bearer token
//! of the current session and maps non-success responses to [`ApiError`]. It never reads
//! the token from storage itself: callers inject it with [`ApiClient::with_token`]. There
//! is no retry, timeout or circuit breaking; every failure is returned to the page.

pub mod articles;
pub mod auth;
pub mod departments;
pub mod employees;
pub mod request;
pub mod transport;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::client::{config::Config, error::ApiError};

pub use self::{
    request::{HttpRequest, HttpResponse, Method, RequestBody},
    transport::{DefaultTransport, Transport},
};

#[derive(Clone)]
pub struct ApiClient<T = DefaultTransport> {
    base_url: String,
    token: Option<String>,
    transport: T,
}

impl ApiClient<DefaultTransport> {
    /// Creates a client for the backend configured in `config` without a session token.
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config.api_base_url.clone(), DefaultTransport::default())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            transport,
        }
    }

    /// Returns a copy of this client that authenticates with `token`.
    ///
    /// An empty token is treated as no token.
    pub fn with_token(&self, token: Option<String>) -> Self
    where
        T: Clone,
    {
        Self {
            base_url: self.base_url.clone(),
            token: token.filter(|token| !token.is_empty()),
            transport: self.transport.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Resolves a request for `path` without sending it.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<RequestBody>,
    ) -> Result<HttpRequest, ApiError> {
        let url = request::build_url(&self.base_url, path, query)?;

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        if let Some(body) = &body {
            headers.push(("Content-Type".to_string(), body.content_type().to_string()));
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let request = self.build_request(Method::Get, path, query, None)?;

        self.execute(request).await?.json()
    }

    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = RequestBody::json(body)?;
        let request = self.build_request(Method::Post, path, &[], Some(body))?;

        self.execute(request).await?.json()
    }

    /// Sends a JSON POST request, ignoring any response body.
    pub(crate) async fn post_json_status<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = RequestBody::json(body)?;
        let request = self.build_request(Method::Post, path, &[], Some(body))?;

        self.execute(request).await.map(|_| ())
    }

    pub(crate) async fn put_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = RequestBody::json(body)?;
        let request = self.build_request(Method::Put, path, &[], Some(body))?;

        self.execute(request).await?.json()
    }

    pub(crate) async fn post_form<R: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let request = self.build_request(Method::Post, path, &[], Some(RequestBody::form(fields)))?;

        self.execute(request).await?.json()
    }

    /// Sends a DELETE request, ignoring any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.build_request(Method::Delete, path, &[], None)?;

        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(method = %method, url = %url, "Sending API request");

        let response = self.transport.send(request).await?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = response.into_error();
            tracing::debug!(method = %method, url = %url, "{}", err);

            Err(err)
        }
    }
}
