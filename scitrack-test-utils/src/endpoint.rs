//! Declarative description of one mocked backend endpoint.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

/// A mocked endpoint, registered on the server during [`crate::TestBuilder::build`].
///
/// Query and body matchers default to [`Matcher::Any`], the response defaults to
/// `200 {}` and the endpoint expects exactly one request.
#[derive(Debug)]
pub struct Endpoint {
    method: &'static str,
    path: String,
    query: Matcher,
    body: Matcher,
    authorization: Option<Matcher>,
    status: usize,
    response: Value,
    expected_requests: usize,
}

impl Endpoint {
    pub fn new(method: &'static str, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Matcher::Any,
            body: Matcher::Any,
            authorization: None,
            status: 200,
            response: Value::Object(Default::default()),
            expected_requests: 1,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new("POST", path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new("PUT", path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new("DELETE", path)
    }

    /// Require every `(key, value)` pair to be present in the URL-encoded query string.
    pub fn query_pairs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.query = Matcher::AllOf(
            pairs
                .iter()
                .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
                .collect(),
        );
        self
    }

    /// Require a JSON body containing at least the fields of `body`.
    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Matcher::PartialJson(body);
        self
    }

    /// Require a form-encoded body containing every `(key, value)` pair.
    pub fn form_body(mut self, pairs: &[(&str, &str)]) -> Self {
        self.body = Matcher::AllOf(
            pairs
                .iter()
                .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
                .collect(),
        );
        self
    }

    /// Require `Authorization: Bearer <token>`.
    pub fn bearer(mut self, token: &str) -> Self {
        self.authorization = Some(Matcher::Exact(format!("Bearer {token}")));
        self
    }

    /// Require the request to carry no `Authorization` header.
    pub fn anonymous(mut self) -> Self {
        self.authorization = Some(Matcher::Missing);
        self
    }

    pub fn respond(mut self, status: usize, response: Value) -> Self {
        self.status = status;
        self.response = response;
        self
    }

    pub fn expect(mut self, expected_requests: usize) -> Self {
        self.expected_requests = expected_requests;
        self
    }

    pub(crate) async fn register(self, server: &mut ServerGuard) -> Mock {
        let mut mock = server
            .mock(self.method, self.path.as_str())
            .match_query(self.query)
            .match_body(self.body);

        if let Some(authorization) = self.authorization {
            mock = mock.match_header("authorization", authorization);
        }

        mock.with_status(self.status)
            .with_header("content-type", "application/json")
            .with_body(self.response.to_string())
            .expect(self.expected_requests)
            .create_async()
            .await
    }
}
