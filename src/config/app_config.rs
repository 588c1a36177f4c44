use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "STORYWEAVE_API_BASE";

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Runtime configuration for the front-end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL all API paths are resolved against.
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to the
    /// localhost default. A present-but-malformed base URL is an error
    /// rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_BASE_ENV) {
            Ok(base) => Self::with_api_base(base),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn with_api_base(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        Url::parse(&base)
            .with_context(|| format!("{API_BASE_ENV} is not a valid URL: {base}"))?;
        Ok(Self { api_base: base })
    }
}
