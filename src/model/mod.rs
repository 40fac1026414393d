//! Data transfer objects exchanged with the registry backend.
//!
//! These types mirror the JSON payloads of the REST API. The frontend only ever holds
//! transient, request-scoped copies of them; the backend owns and persists every entity.

pub mod api;
pub mod article;
pub mod department;
pub mod employee;
pub mod user;

#[cfg(test)]
mod tests;
