// Causa Core Library
// Dashboard client for the "Valor da Causa" backend: loaders, formatters and views

pub mod api;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod loaders;
pub mod report;
pub mod scheduler;
pub mod search;
pub mod state;
pub mod view;

// Export core types
pub use api::{
    ApiClient, ChartSeries, ChartsPayload, DashboardApi, Envelope, KpiSummary, ProcessRecord,
};
pub use config::{resolve_base_url, ClientConfig};
pub use dashboard::Dashboard;
pub use format::{format_currency, format_number};
pub use loaders::LoadOutcome;
pub use report::{ErrorReporter, LogReporter};
pub use scheduler::{RefreshHandle, RefreshScheduler};
pub use search::{filter_processes, SearchListener};
pub use state::{process_store, ProcessReader, ProcessWriter};
pub use view::{ChartContainer, ChartFigure, DashboardView, HtmlView, KpiSlot, TableBody};

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CausaError {
    #[error("Server reported failure: {}", .0.as_deref().unwrap_or("no details"))]
    Server(Option<String>),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0} with unreadable body")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Search listener already installed")]
    SearchAlreadyInstalled,

    #[error("Config error: {0}")]
    Config(String),
}

impl CausaError {
    /// True for failures the backend reported itself, as opposed to connection or parse problems
    pub fn is_server_reported(&self) -> bool {
        matches!(self, CausaError::Server(_))
    }
}

pub type Result<T> = std::result::Result<T, CausaError>;
