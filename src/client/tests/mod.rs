mod error;
mod router;
