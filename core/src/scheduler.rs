// Refresh scheduler
//
// Loads everything once at startup, then re-runs the three loaders on a fixed interval
// until stopped. Runs are fire-and-forget: a slow run may overlap the next one.

use crate::dashboard::Dashboard;
use crate::search::SearchListener;
use crate::{CausaError, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

pub struct RefreshScheduler {
    dashboard: Arc<Dashboard>,
    interval: Duration,
}

impl RefreshScheduler {
    pub fn new(dashboard: Arc<Dashboard>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CausaError::Config(
                "refresh interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            dashboard,
            interval,
        })
    }

    /// Start the cycle. Must be called from within a tokio runtime.
    ///
    /// Installs the search listener (once per dashboard) and kicks off the first load
    /// before returning.
    pub fn start(self) -> Result<RefreshHandle> {
        let search = self.dashboard.install_search()?;

        info!(
            target: "causa::scheduler",
            interval_secs = self.interval.as_secs(),
            "Starting dashboard refresh"
        );
        spawn_loaders(&self.dashboard);

        let cycles = Arc::new(AtomicU64::new(0));
        let cycles_clone = Arc::clone(&cycles);
        let dashboard = self.dashboard;
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let cycle = cycles_clone.fetch_add(1, Ordering::SeqCst) + 1;
                debug!(target: "causa::scheduler", cycle, "Refreshing dashboard");
                spawn_loaders(&dashboard);
            }
        });

        Ok(RefreshHandle {
            task,
            search,
            cycles,
        })
    }
}

/// Each loader gets its own task; nothing waits on them
fn spawn_loaders(dashboard: &Arc<Dashboard>) {
    let d = Arc::clone(dashboard);
    tokio::spawn(async move {
        d.load_kpis().await;
    });
    let d = Arc::clone(dashboard);
    tokio::spawn(async move {
        d.load_charts().await;
    });
    let d = Arc::clone(dashboard);
    tokio::spawn(async move {
        d.load_processes().await;
    });
}

/// Stop handle for a running refresh cycle. Dropping it leaves the cycle running.
pub struct RefreshHandle {
    task: JoinHandle<()>,
    search: SearchListener,
    cycles: Arc<AtomicU64>,
}

impl RefreshHandle {
    /// The search listener installed at startup
    pub fn search(&self) -> SearchListener {
        self.search.clone()
    }

    /// Interval firings so far, not counting the startup load
    pub fn cycles(&self) -> u64 {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Stop future firings. Requests already in flight still complete.
    pub fn stop(&self) {
        info!(target: "causa::scheduler", cycles = self.cycles(), "Stopping dashboard refresh");
        self.task.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}
