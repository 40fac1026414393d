use url::Url;

use crate::client::error::ConfigError;

/// Environment variable holding the backend base URL.
pub static API_URL_VAR: &str = "SCITRACK_API_URL";
pub static DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL every API path is appended to, without a trailing slash.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration, defaulting to a backend on localhost.
    ///
    /// Web builds only see the value baked in at compile time; native builds also read
    /// the process environment and a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        match Self::lookup() {
            Some(value) => Self::from_base_url(&value),
            None => Ok(Self::default()),
        }
    }

    pub fn from_base_url(value: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEnvValue {
            var: API_URL_VAR.to_string(),
            reason,
        };

        let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        Ok(Self {
            api_base_url: value.trim().trim_end_matches('/').to_string(),
        })
    }

    #[cfg(target_arch = "wasm32")]
    fn lookup() -> Option<String> {
        option_env!("SCITRACK_API_URL").map(str::to_string)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn lookup() -> Option<String> {
        dotenvy::dotenv().ok();

        std::env::var(API_URL_VAR)
            .ok()
            .or_else(|| option_env!("SCITRACK_API_URL").map(str::to_string))
    }
}
