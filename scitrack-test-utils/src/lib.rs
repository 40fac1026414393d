//! Test helpers for the scitrack frontend.
//!
//! Provides a declarative [`TestBuilder`] that stands up a mock registry backend with
//! `mockito`, JSON fixtures shaped like the backend's responses, and helpers for minting
//! session tokens.

pub mod builder;
pub mod endpoint;
pub mod error;
pub mod fixtures;
pub mod jwt;
pub mod setup;

pub use builder::TestBuilder;
pub use endpoint::Endpoint;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::factory, jwt, Endpoint, TestBuilder, TestError, TestSetup};
}
