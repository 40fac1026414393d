use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
}
