//! Declarative test builder for a mock registry backend.
//!
//! Endpoints are queued on the builder and registered on a fresh `mockito` server in the
//! final `build()` call.

use serde_json::{json, Value};

use crate::{endpoint::Endpoint, setup::TestSetup};

/// Builder for a mock backend.
///
/// # Example
///
/// ```no_run
/// use scitrack_test_utils::{fixtures::factory, TestBuilder};
///
/// # async fn example() {
/// let test = TestBuilder::new()
///     .with_departments(vec![factory::department(1, "Physics", None, &[])], 1)
///     .build()
///     .await;
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TestBuilder {
    endpoints: Vec<Endpoint>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an arbitrary endpoint.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// `GET /articles/` matching the given query pairs.
    pub fn with_article_list(
        self,
        query: &[(&str, &str)],
        page: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(
            Endpoint::get("/articles/")
                .query_pairs(query)
                .respond(200, page)
                .expect(expected_requests),
        )
    }

    /// `GET /articles/{id}`.
    pub fn with_article(self, id: i32, article: Value, expected_requests: usize) -> Self {
        self.with_endpoint(
            Endpoint::get(format!("/articles/{id}"))
                .respond(200, article)
                .expect(expected_requests),
        )
    }

    /// `GET /departments/`.
    pub fn with_departments(self, departments: Vec<Value>, expected_requests: usize) -> Self {
        self.with_endpoint(
            Endpoint::get("/departments/")
                .respond(200, Value::Array(departments))
                .expect(expected_requests),
        )
    }

    /// `PUT /departments/{id}` echoing `department` back.
    pub fn with_department_update(
        self,
        id: i32,
        department: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(
            Endpoint::put(format!("/departments/{id}"))
                .respond(200, department)
                .expect(expected_requests),
        )
    }

    /// `DELETE /departments/{id}`.
    pub fn with_department_delete(self, id: i32, expected_requests: usize) -> Self {
        self.with_endpoint(
            Endpoint::delete(format!("/departments/{id}"))
                .respond(200, json!({ "status": "success" }))
                .expect(expected_requests),
        )
    }

    /// `GET /auth/users`.
    pub fn with_users(self, users: Vec<Value>, expected_requests: usize) -> Self {
        self.with_endpoint(
            Endpoint::get("/auth/users")
                .respond(200, Value::Array(users))
                .expect(expected_requests),
        )
    }

    /// `POST /auth/token` accepting `login`/`password` and returning `token`.
    pub fn with_login(
        self,
        login: &str,
        password: &str,
        token: &str,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(
            Endpoint::post("/auth/token")
                .form_body(&[("username", login), ("password", password)])
                .respond(
                    200,
                    json!({ "access_token": token, "token_type": "bearer" }),
                )
                .expect(expected_requests),
        )
    }

    /// `POST /auth/token` rejecting any credentials.
    pub fn with_login_rejected(self, expected_requests: usize) -> Self {
        self.with_endpoint(
            Endpoint::post("/auth/token")
                .respond(401, json!({ "detail": "Incorrect login or password" }))
                .expect(expected_requests),
        )
    }

    /// `GET /auth/me` for a request carrying `token`.
    pub fn with_me(self, token: &str, user: Value, expected_requests: usize) -> Self {
        self.with_endpoint(
            Endpoint::get("/auth/me")
                .bearer(token)
                .respond(200, user)
                .expect(expected_requests),
        )
    }

    /// `GET /auth/me` failing with 401.
    pub fn with_me_rejected(self, expected_requests: usize) -> Self {
        self.with_endpoint(
            Endpoint::get("/auth/me")
                .respond(401, json!({ "detail": "Could not validate credentials" }))
                .expect(expected_requests),
        )
    }

    /// Any endpoint failing with `status` and a `detail` message.
    pub fn with_error(
        self,
        method: &'static str,
        path: &str,
        status: usize,
        detail: &str,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(
            Endpoint::new(method, path)
                .respond(status, json!({ "detail": detail }))
                .expect(expected_requests),
        )
    }

    /// Starts the mock server and registers every queued endpoint.
    pub async fn build(self) -> TestSetup {
        let mut server = mockito::Server::new_async().await;

        let mut mocks = Vec::with_capacity(self.endpoints.len());
        for endpoint in self.endpoints {
            mocks.push(endpoint.register(&mut server).await);
        }

        TestSetup { server, mocks }
    }
}
