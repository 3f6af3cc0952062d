//! Known API endpoints.

use std::fmt;

/// Base URL of the public epidemic data API.
pub const DEFAULT_API_BASE: &str = "https://lab.isaaclin.cn/nCoV/api";

/// One logical dataset served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Full history of overall snapshots (`latest=0`).
    Overall,
    /// Newest snapshot per region.
    Region,
    /// News articles.
    News,
    /// Rumors with their debunking summaries.
    Rumors,
}

impl Endpoint {
    /// Path and query relative to the API base.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Overall => "/overall?latest=0",
            Endpoint::Region => "/area?latest=1",
            Endpoint::News => "/news?num=all",
            Endpoint::Rumors => "/rumors?num=all",
        }
    }

    /// Full URL under `base`. A trailing slash on `base` is ignored.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Overall => "overall",
            Endpoint::Region => "region",
            Endpoint::News => "news",
            Endpoint::Rumors => "rumors",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_requests_full_history() {
        assert_eq!(
            Endpoint::Overall.url(DEFAULT_API_BASE),
            "https://lab.isaaclin.cn/nCoV/api/overall?latest=0"
        );
    }

    #[test]
    fn test_url_ignores_trailing_slash() {
        assert_eq!(
            Endpoint::Rumors.url("http://localhost:8080/api/"),
            "http://localhost:8080/api/rumors?num=all"
        );
    }
}
