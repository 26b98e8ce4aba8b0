use crate::config::MapTilerConfig;
use crate::core::{epsg_code, CrsAdapter, Resolution};
use crate::utils::error::{ResolveError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const SOURCE: &str = "maptiler";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

/// Search payload returned by the Coordinates API.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: u64,
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    exports: HashMap<String, String>,
}

/// Registry backend for the MapTiler Coordinates API (the successor of
/// epsg.io). Resolves an EPSG code into a display name and a projection
/// definition via two concurrent lookups against the search endpoint.
pub struct MapTilerAdapter {
    config: MapTilerConfig,
    client: Client,
}

impl MapTilerAdapter {
    pub fn new(config: MapTilerConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn search_url(&self, code: &str) -> String {
        format!(
            "{}/coordinates/search/code:{}.json?exports=true&key={}",
            self.config.endpoint.trim_end_matches('/'),
            code,
            self.config.api_key
        )
    }

    /// One GET against the search endpoint. Returns the parsed payload
    /// together with the raw body so failure paths can carry the original
    /// response text.
    async fn fetch(&self, url: &str) -> Result<(SearchResponse, String)> {
        let response = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        let raw = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&raw)?;
        Ok((parsed, raw))
    }

    fn no_match_error(&self, url: String, raw_body: String) -> ResolveError {
        ResolveError::InvalidResponse {
            status: 404,
            body: raw_body,
            url,
            adapter: SOURCE,
            method: "GET",
        }
    }

    async fn fetch_name(&self, code: &str) -> Result<String> {
        let url = self.search_url(code);
        let (body, raw) = self.fetch(&url).await?;

        if body.total == 0 {
            return Err(self.no_match_error(url, raw));
        }

        match body.results.first().and_then(|r| r.name.as_deref()) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(ResolveError::MissingField { field: "name" }),
        }
    }

    async fn fetch_projection(&self, code: &str, format: &str) -> Result<String> {
        let url = self.search_url(code);
        let (body, raw) = self.fetch(&url).await?;

        if body.total == 0 {
            return Err(self.no_match_error(url, raw));
        }

        body.results
            .first()
            .and_then(|r| r.exports.get(format))
            .cloned()
            .ok_or(ResolveError::MissingField {
                field: "projection export",
            })
    }
}

#[async_trait]
impl CrsAdapter for MapTilerAdapter {
    fn source(&self) -> &'static str {
        SOURCE
    }

    async fn get(&self, crs: &str, format: &str) -> Result<Resolution> {
        let format = format.to_lowercase();
        let crs = crs.to_lowercase();

        if !self.is_valid_crs(&crs) {
            return Err(ResolveError::UnknownCrs(crs));
        }

        if !self.is_valid_crs_format(&format) {
            return Err(ResolveError::UnknownCrsFormat(format));
        }

        let code = epsg_code(&crs);
        tracing::debug!("Resolving code {} as {} via {}", code, format, SOURCE);

        // Independent requests to the same search endpoint, in flight
        // together; the first failure aborts the whole call.
        let (name, projection) =
            tokio::try_join!(self.fetch_name(code), self.fetch_projection(code, &format))?;

        tracing::debug!("Resolved {} to '{}'", crs, name);

        Ok(Resolution {
            source: SOURCE,
            crs,
            name,
            format,
            definition: projection.trim().to_string(),
        })
    }
}
