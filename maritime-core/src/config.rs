use crate::csrf::CSRF_COOKIE;
use crate::query::SiteQuery;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/maritimeapp";

/// Where the measurements API lives and how its CSRF cookie is named.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub csrf_cookie: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_cookie: CSRF_COOKIE.to_string(),
        }
    }

    /// Config baked in at compile time through `MARITIME_API_BASE`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("MARITIME_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn sites_url(&self, query: &SiteQuery) -> String {
        format!("{}/measurements/sites/?{}", self.base_url, query.to_query_string())
    }

    pub fn measurements_url(&self) -> String {
        format!("{}/measurements/", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = ApiConfig::new("https://example.org/maritimeapp/");
        let query = SiteQuery {
            start_date: "2020-01-01".to_string(),
            ..SiteQuery::default()
        };
        assert_eq!(
            config.sites_url(&query),
            "https://example.org/maritimeapp/measurements/sites/?start_date=2020-01-01"
        );
        assert_eq!(config.measurements_url(), "https://example.org/maritimeapp/measurements/");
    }
}
