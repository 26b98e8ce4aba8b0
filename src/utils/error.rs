use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),

    #[error("Unknown CRS format: {0}")]
    UnknownCrsFormat(String),

    #[error("Invalid response from {adapter} ({method} {url}): status {status}")]
    InvalidResponse {
        status: u16,
        body: String,
        url: String,
        adapter: &'static str,
        method: &'static str,
    },

    #[error("Cannot extract {field} from CRS definition")]
    MissingField { field: &'static str },

    #[error("Registry request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration value: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
