// Dashboard application state
//
// Owns the API client, the view, the error hook and the only writer of the process list.

use crate::api::{ApiClient, DashboardApi};
use crate::config::ClientConfig;
use crate::loaders::{self, LoadOutcome};
use crate::report::{ErrorReporter, LogReporter};
use crate::search::SearchListener;
use crate::state::{process_store, ProcessReader, ProcessWriter};
use crate::view::DashboardView;
use crate::{CausaError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub struct Dashboard {
    api: Arc<dyn DashboardApi>,
    view: Arc<dyn DashboardView>,
    reporter: Arc<dyn ErrorReporter>,
    processes: ProcessWriter,
    search_installed: AtomicBool,
}

impl Dashboard {
    pub fn new(api: Arc<dyn DashboardApi>, view: Arc<dyn DashboardView>) -> Self {
        let (processes, _) = process_store();
        Self {
            api,
            view,
            reporter: Arc::new(LogReporter),
            processes,
            search_installed: AtomicBool::new(false),
        }
    }

    /// Dashboard talking to the backend resolved from `config`
    pub fn connect(config: &ClientConfig, view: Arc<dyn DashboardView>) -> Result<Self> {
        let client = ApiClient::from_config(config)?;
        info!(target: "causa::dashboard", base_url = %client.base_url(), "Dashboard backend resolved");
        Ok(Self::new(Arc::new(client), view))
    }

    /// Replace the shared error hook
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn view(&self) -> Arc<dyn DashboardView> {
        Arc::clone(&self.view)
    }

    /// Read access to the current process list
    pub fn processes(&self) -> ProcessReader {
        self.processes.reader()
    }

    pub async fn load_kpis(&self) -> LoadOutcome {
        loaders::load_kpis(self.api.as_ref(), self.view.as_ref(), self.reporter.as_ref()).await
    }

    pub async fn load_charts(&self) -> LoadOutcome {
        loaders::load_charts(self.api.as_ref(), self.view.as_ref(), self.reporter.as_ref()).await
    }

    pub async fn load_processes(&self) -> LoadOutcome {
        loaders::load_processes(self.api.as_ref(), &self.processes, self.view.as_ref()).await
    }

    /// Run the three loaders concurrently and wait for all of them
    pub async fn refresh_all(&self) -> [LoadOutcome; 3] {
        let (kpis, charts, processes) =
            tokio::join!(self.load_kpis(), self.load_charts(), self.load_processes());
        [kpis, charts, processes]
    }

    /// Hand out the search listener. Only the first call succeeds.
    pub fn install_search(&self) -> Result<SearchListener> {
        if self.search_installed.swap(true, Ordering::SeqCst) {
            return Err(CausaError::SearchAlreadyInstalled);
        }
        Ok(SearchListener::new(self.processes(), self.view()))
    }
}
