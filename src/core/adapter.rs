use crate::core::model::Resolution;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Export formats the backing registries serve.
pub const SUPPORTED_FORMATS: &[&str] = &[
    "proj4", "wkt", "ogcwkt", "esriwkt", "mapfile", "mapnik", "sql", "js",
];

/// Contract for one registry backend. Each implementation resolves CRS
/// data from a single external registry; callers pick (or iterate over)
/// backends without knowing which registry answers.
#[async_trait]
pub trait CrsAdapter: Send + Sync {
    /// Fixed identifier of this backend, reported in every resolution.
    fn source(&self) -> &'static str;

    /// Resolve a CRS identifier into its display name and projection
    /// definition in the requested export format. Inputs are matched
    /// case-insensitively.
    async fn get(&self, crs: &str, format: &str) -> Result<Resolution>;

    fn is_valid_crs(&self, crs: &str) -> bool {
        is_valid_crs(crs)
    }

    fn is_valid_crs_format(&self, format: &str) -> bool {
        is_valid_crs_format(format)
    }
}

/// A CRS identifier is an optional `epsg:` namespace prefix followed by a
/// numeric registry code. Expects lower-cased input.
pub fn is_valid_crs(crs: &str) -> bool {
    let code = epsg_code(crs);
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_crs_format(format: &str) -> bool {
    SUPPORTED_FORMATS.contains(&format)
}

/// Strips the `epsg:` namespace prefix, leaving the bare registry code.
pub fn epsg_code(crs: &str) -> &str {
    crs.strip_prefix("epsg:").unwrap_or(crs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsg_code_strips_namespace() {
        assert_eq!(epsg_code("epsg:4326"), "4326");
        assert_eq!(epsg_code("4326"), "4326");
        assert_eq!(epsg_code("epsg:"), "");
    }

    #[test]
    fn test_is_valid_crs() {
        assert!(is_valid_crs("epsg:4326"));
        assert!(is_valid_crs("4326"));
        assert!(is_valid_crs("epsg:999999"));
        assert!(!is_valid_crs("epsg:"));
        assert!(!is_valid_crs(""));
        assert!(!is_valid_crs("epsg:wgs84"));
        assert!(!is_valid_crs("urn:ogc:def:crs:epsg::4326"));
    }

    #[test]
    fn test_is_valid_crs_format() {
        assert!(is_valid_crs_format("wkt"));
        assert!(is_valid_crs_format("proj4"));
        assert!(is_valid_crs_format("ogcwkt"));
        assert!(!is_valid_crs_format("geojson"));
        assert!(!is_valid_crs_format(""));
        // predicates expect normalized input
        assert!(!is_valid_crs_format("WKT"));
    }
}
