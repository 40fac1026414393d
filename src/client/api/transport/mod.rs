//! Transports that carry an [`HttpRequest`] to the backend.
//!
//! Browser builds use the Fetch API through `reqwasm`, native builds (desktop and tests)
//! use `reqwest`.

use crate::client::{
    api::request::{HttpRequest, HttpResponse},
    error::ApiError,
};

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeTransport;

#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = NativeTransport;

/// Sends a request and returns the raw response.
///
/// Implementations report only transport failures as errors; any HTTP status, including
/// 4xx and 5xx, is a successful send.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
