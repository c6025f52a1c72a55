use std::fs;
use std::path::Path;
use std::time::Duration;

use causa_core::ClientConfig;

/// Configuration for the dashboard host
#[derive(Clone, Debug)]
pub struct DashboardServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin browsers use to reach this server; defaults to `http://{host}:{port}`
    pub public_origin: Option<String>,
    pub client: ClientConfig,
}

impl Default for DashboardServerConfig {
    fn default() -> Self {
        let mut cfg = Self {
            host: std::env::var("CAUSA_DASHBOARD_HOST")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "localhost".to_string()),
            port: std::env::var("CAUSA_DASHBOARD_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            public_origin: std::env::var("CAUSA_PUBLIC_ORIGIN")
                .ok()
                .filter(|s| !s.is_empty()),
            client: ClientConfig::default(),
        };
        cfg.sync_page_origin();
        cfg
    }
}

impl DashboardServerConfig {
    /// Load configuration from a TOML file (path via CAUSA_DASHBOARD_CONFIG or
    /// ./causa_dashboard.toml), overlaying values onto env-driven defaults.
    pub fn load() -> Self {
        let path = std::env::var("CAUSA_DASHBOARD_CONFIG")
            .unwrap_or_else(|_| "causa_dashboard.toml".into());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Self {
        let default = Self::default();
        if !path.exists() {
            tracing::info!(target: "causa_dashboard", path = %path.display(), "No TOML config found; using defaults/env");
            return default;
        }
        match fs::read_to_string(path) {
            Ok(s) => match toml::from_str::<DashboardToml>(&s) {
                Ok(t) => t.overlay(default),
                Err(e) => {
                    tracing::warn!(target: "causa_dashboard", error = %e, "Failed to parse TOML; using defaults");
                    default
                }
            },
            Err(e) => {
                tracing::warn!(target: "causa_dashboard", error = %e, "Failed to read TOML; using defaults");
                default
            }
        }
    }

    pub fn public_origin(&self) -> String {
        self.public_origin
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The page is served from here, so this is the origin the backend resolver sees
    fn sync_page_origin(&mut self) {
        self.client.page_origin = self.public_origin();
    }
}

// =========================
// TOML overlay definitions
// =========================

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct DashboardToml {
    pub server: Option<ServerToml>,
    pub api: Option<ApiToml>,
}

impl DashboardToml {
    fn overlay(self, mut base: DashboardServerConfig) -> DashboardServerConfig {
        if let Some(s) = self.server {
            s.apply(&mut base);
        }
        if let Some(a) = self.api {
            a.apply(&mut base.client);
        }
        base.sync_page_origin();
        base
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct ServerToml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub public_origin: Option<String>,
}
impl ServerToml {
    fn apply(self, s: &mut DashboardServerConfig) {
        if let Some(x) = self.host {
            s.host = x;
        }
        if let Some(x) = self.port {
            s.port = x;
        }
        if let Some(x) = self.public_origin.filter(|x| !x.is_empty()) {
            s.public_origin = Some(x);
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct ApiToml {
    pub url: Option<String>,
    pub refresh_secs: Option<u64>,
    pub request_timeout_ms: Option<u64>,
}
impl ApiToml {
    fn apply(self, c: &mut ClientConfig) {
        if let Some(x) = self.url.filter(|x| !x.is_empty()) {
            c.api_override = Some(x);
        }
        if let Some(x) = self.refresh_secs.filter(|x| *x > 0) {
            c.refresh_interval = Duration::from_secs(x);
        }
        if let Some(x) = self.request_timeout_ms {
            c.request_timeout = Some(Duration::from_millis(x));
        }
    }
}
