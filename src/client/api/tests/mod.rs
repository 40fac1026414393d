mod auth;
mod departments;
mod employees;

use crate::client::api::{ApiClient, transport::NativeTransport};

/// Client pointed at a mock backend.
fn client(base_url: &str) -> ApiClient<NativeTransport> {
    ApiClient::with_transport(base_url, NativeTransport::default())
}
