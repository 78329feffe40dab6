use reqwest::Url;

use crate::client::ApiError;

/// Local backend during development.
pub const DEV_API_BASE: &str = "http://localhost:8080/api";
/// Same-origin path used when the front-end is served by the backend.
pub const PROD_API_BASE: &str = "/api";

/// Where the API client sends requests.
///
/// A relative `base_url` such as [`PROD_API_BASE`] is resolved against
/// `origin`, which in the browser is the page's own origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub origin: Option<String>,
}

impl Default for ApiConfig {
    /// `PORTAL_API_BASE` at build time wins; otherwise debug builds talk to the
    /// local backend and release builds use the same-origin path.
    fn default() -> Self {
        let base_url = match option_env!("PORTAL_API_BASE") {
            Some(base) if !base.is_empty() => base,
            _ if cfg!(debug_assertions) => DEV_API_BASE,
            _ => PROD_API_BASE,
        };
        Self::new(base_url)
    }
}

impl ApiConfig {
    /// Config for `base_url`, resolving relative bases against the page origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_origin(base_url, page_origin())
    }

    pub fn with_origin(base_url: impl Into<String>, origin: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            origin,
        }
    }

    /// Absolute URL for an endpoint path such as `"art/random"`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let parsed = match &self.origin {
            Some(origin) => Url::parse(origin).and_then(|origin| origin.join(&joined)),
            None => Url::parse(&joined),
        };
        parsed.map_err(|e| ApiError::InvalidUrl {
            url: joined,
            reason: e.to_string(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys_x::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:8080/api/");
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(
            config.endpoint("activities").unwrap().as_str(),
            "http://localhost:8080/api/activities"
        );
    }

    #[test]
    fn test_relative_base_resolves_against_origin() {
        let config = ApiConfig::with_origin(PROD_API_BASE, Some("https://portal.example".into()));
        assert_eq!(
            config.endpoint("/art/random").unwrap().as_str(),
            "https://portal.example/api/art/random"
        );
    }

    #[test]
    fn test_absolute_base_ignores_origin() {
        let config = ApiConfig::with_origin(DEV_API_BASE, Some("https://portal.example".into()));
        assert_eq!(
            config.endpoint("tournaments").unwrap().as_str(),
            "http://localhost:8080/api/tournaments"
        );
    }

    #[test]
    fn test_relative_base_without_origin_is_an_error() {
        let config = ApiConfig::with_origin(PROD_API_BASE, None);
        let err = config.endpoint("activities").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { ref url, .. } if url == "/api/activities"));
    }

    #[test]
    fn test_default_is_one_of_known_bases() {
        let config = ApiConfig::default();
        if option_env!("PORTAL_API_BASE").is_none() {
            assert!(config.base_url == DEV_API_BASE || config.base_url == PROD_API_BASE);
        }
    }
}
