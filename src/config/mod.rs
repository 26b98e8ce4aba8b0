use crate::utils::error::{ResolveError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.maptiler.com";

/// Connection settings for the MapTiler Coordinates API. Injected into the
/// adapter at construction time so the adapter never reads ambient process
/// state itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapTilerConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl MapTilerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Sources the API key from `MAPTILER_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("MAPTILER_API_KEY").map_err(|_| ResolveError::MissingConfig {
                field: "MAPTILER_API_KEY".to_string(),
            })?;
        Ok(Self::new(api_key))
    }

    /// Points the adapter at a different registry endpoint, e.g. a mock
    /// server in tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Validate for MapTilerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("endpoint", &self.endpoint)?;
        Ok(())
    }
}
