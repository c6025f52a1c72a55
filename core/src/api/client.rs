/// HTTP client for the dashboard backend
///
/// Issues plain GETs against `{base}/api/...` and decodes the JSON envelope.
use crate::api::{
    ChartsPayload, DashboardApi, Endpoint, Envelope, KpiSummary, ProcessRecord,
};
use crate::config::ClientConfig;
use crate::{CausaError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const USER_AGENT: &str = "causa-dashboard/0.1";

pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Client against an explicit base URL, no request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url.into(), reqwest::Client::new())
    }

    /// Client resolved from config (base URL and optional timeout)
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            warn!(target: "causa::api", error = %e, "Failed to build HTTP client");
            CausaError::Transport(e)
        })?;

        Ok(Self::with_http_client(config.base_url(), http_client))
    }

    fn with_http_client(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// GET an endpoint and decode its envelope.
    ///
    /// The body is decoded whatever the status: error statuses usually still carry
    /// `{success: false, error}`. Only an unreadable body on a non-2xx becomes `Status`.
    async fn get_envelope<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Envelope<T>> {
        let url = self.url(endpoint);
        debug!(target: "causa::api", url = %url, "GET");

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                warn!(target: "causa::api", url = %url, error = %e, "Request failed");
                CausaError::Transport(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(target: "causa::api", url = %url, error = %e, "Failed to read response body");
            CausaError::Transport(e)
        })?;

        match serde_json::from_slice::<Envelope<T>>(&body) {
            Ok(envelope) => {
                debug!(
                    target: "causa::api",
                    url = %url,
                    status = %status,
                    success = envelope.success,
                    "Decoded envelope"
                );
                Ok(envelope)
            }
            Err(e) if !status.is_success() => {
                warn!(target: "causa::api", url = %url, status = %status, error = %e, "Error status without envelope");
                Err(CausaError::Status(status.as_u16()))
            }
            Err(e) => {
                warn!(target: "causa::api", url = %url, error = %e, "Failed to parse envelope");
                Err(CausaError::Decode(e))
            }
        }
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn fetch_kpis(&self) -> Result<Envelope<KpiSummary>> {
        self.get_envelope(Endpoint::Kpis).await
    }

    async fn fetch_charts(&self) -> Result<Envelope<ChartsPayload>> {
        self.get_envelope(Endpoint::Charts).await
    }

    async fn fetch_processes(&self) -> Result<Envelope<Vec<ProcessRecord>>> {
        self.get_envelope(Endpoint::Processes).await
    }
}
