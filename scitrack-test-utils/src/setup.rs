use mockito::{Mock, ServerGuard};

/// A running mock backend and the endpoints registered on it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Base URL of the mock backend, usable as the client's API base URL.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Asserts that every registered endpoint received its expected number of requests.
    pub async fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}
