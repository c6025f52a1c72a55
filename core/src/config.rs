// Client configuration
//
// Resolves the backend origin from the page origin and an optional runtime override.

use std::time::Duration;

/// Backend used while the page itself is served from a development host
pub const LOCAL_API_URL: &str = "http://localhost:5000";
/// Deployed backend used when no override is injected
pub const DEFAULT_API_URL: &str = "https://backend-7nl8.onrender.com";
pub const DEFAULT_PAGE_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Pick the backend base URL for a page served from `page_origin`.
///
/// Development pages always talk to the local backend; otherwise a non-empty
/// override wins over the compiled-in remote default.
pub fn resolve_base_url(page_origin: &str, api_override: Option<&str>) -> String {
    let base = if page_origin.contains("localhost") {
        LOCAL_API_URL
    } else {
        api_override
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL)
    };
    base.strip_suffix('/').unwrap_or(base).to_string()
}

/// Dashboard client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Origin the dashboard page is served from
    pub page_origin: String,
    /// Runtime-injected backend origin
    pub api_override: Option<String>,
    pub refresh_interval: Duration,
    /// No timeout unless set explicitly
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            page_origin: std::env::var("CAUSA_PAGE_ORIGIN")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_PAGE_ORIGIN.to_string()),
            api_override: std::env::var("CAUSA_API_URL").ok().filter(|s| !s.is_empty()),
            refresh_interval: std::env::var("CAUSA_REFRESH_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REFRESH_INTERVAL),
            request_timeout: std::env::var("CAUSA_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_millis),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Config for a page served from `page_origin`, everything else from the environment
    pub fn for_origin(page_origin: impl Into<String>) -> Self {
        Self {
            page_origin: page_origin.into(),
            ..Self::default()
        }
    }

    pub fn base_url(&self) -> String {
        resolve_base_url(&self.page_origin, self.api_override.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_page_uses_local_backend_even_with_override() {
        assert_eq!(
            resolve_base_url("http://localhost:3000", Some("https://api.example.com")),
            LOCAL_API_URL
        );
    }

    #[test]
    fn override_wins_on_deployed_page() {
        assert_eq!(
            resolve_base_url("https://causa.example.com", Some("https://api.example.com/")),
            "https://api.example.com"
        );
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(
            resolve_base_url("https://causa.example.com", Some("  ")),
            DEFAULT_API_URL
        );
        assert_eq!(resolve_base_url("https://causa.example.com", None), DEFAULT_API_URL);
    }
}
