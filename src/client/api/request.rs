use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use url::{form_urlencoded, Url};

use crate::{client::error::ApiError, model::api::ErrorDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Json(String),
    Form(String),
}

impl RequestBody {
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        serde_json::to_string(body)
            .map(Self::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }

    /// URL-encodes `fields` as an `application/x-www-form-urlencoded` body.
    pub fn form(fields: &[(&str, &str)]) -> Self {
        Self::Form(
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(fields)
                .finish(),
        )
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Json(body) | Self::Form(body) => body,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Json(body) | Self::Form(body) => body,
        }
    }
}

/// A fully resolved request, independent of the transport that sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Converts a non-success response into an error carrying the backend's detail.
    pub fn into_error(self) -> ApiError {
        let detail = serde_json::from_str::<ErrorDto>(&self.body)
            .ok()
            .and_then(|dto| dto.message());

        ApiError::Status {
            status: self.status,
            detail,
        }
    }
}

/// Joins `path` onto `base` and appends the URL-encoded `query`.
///
/// The base may carry a path prefix of its own, so the two are concatenated rather than
/// resolved against each other.
pub fn build_url(base: &str, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
    let joined = format!("{}{}", base.trim_end_matches('/'), path);
    let mut url = Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))?;

    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
    }

    Ok(url.into())
}
