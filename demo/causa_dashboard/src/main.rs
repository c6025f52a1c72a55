// Valor da Causa dashboard host
//
// Resolves the backend, starts the refresh cycle and serves the rendered page.

mod config;
mod server;

use causa_core::{Dashboard, HtmlView, RefreshScheduler};
use config::DashboardServerConfig;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,causa_core=info,causa_dashboard=info")),
        )
        .with_target(true)
        .init();

    let cfg = DashboardServerConfig::load();
    info!(
        target: "causa_dashboard",
        addr = %cfg.bind_addr(),
        origin = %cfg.client.page_origin,
        refresh_secs = cfg.client.refresh_interval.as_secs(),
        "Starting Valor da Causa dashboard"
    );

    let view = Arc::new(HtmlView::new());
    let dashboard = Arc::new(Dashboard::connect(
        &cfg.client,
        view.clone(),
    )?);
    let handle = RefreshScheduler::new(dashboard, cfg.client.refresh_interval)?.start()?;

    let router = server::build_router(view, handle.search());
    let result = server::serve(&cfg.bind_addr(), router, shutdown_signal()).await;

    handle.stop();
    info!(target: "causa_dashboard", cycles = handle.cycles(), "Dashboard stopped");
    result
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(target: "causa_dashboard", error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!(target: "causa_dashboard", "Shutdown requested");
}
