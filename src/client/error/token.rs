use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has no payload segment")]
    MissingPayload,
    #[error("Failed to decode token payload: {0}")]
    Base64(String),
    #[error("Failed to parse token claims: {0}")]
    Claims(String),
}
