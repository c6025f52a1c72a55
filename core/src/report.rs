// Shared error hook for the KPI and chart loaders

use tracing::error;

/// Receives user-facing failure messages
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Logs the message and shows nothing on the page
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, message: &str) {
        error!(target: "causa::report", message = %message, "Dashboard error");
    }
}
