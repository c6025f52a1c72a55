/// Backend API: response envelope, payload models and the HTTP client
pub mod client;
pub mod envelope;
pub mod models;

pub use client::ApiClient;
pub use envelope::Envelope;
pub use models::{ChartSeries, ChartsPayload, KpiSummary, ProcessRecord};

use crate::Result;
use async_trait::async_trait;

/// Endpoints consumed by the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Kpis,
    Charts,
    Processes,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Kpis => "/api/kpis",
            Endpoint::Charts => "/api/charts",
            Endpoint::Processes => "/api/processes",
        }
    }
}

/// Source of dashboard data.
///
/// `Err` means the request never produced an envelope (connection or parse failure);
/// a server-reported failure arrives as `Ok` with `success == false`.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_kpis(&self) -> Result<Envelope<KpiSummary>>;

    async fn fetch_charts(&self) -> Result<Envelope<ChartsPayload>>;

    async fn fetch_processes(&self) -> Result<Envelope<Vec<ProcessRecord>>>;
}
