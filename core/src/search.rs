// Search filter over the shared process list

use crate::api::ProcessRecord;
use crate::state::ProcessReader;
use crate::view::{table_body, DashboardView, TableBody};
use std::sync::Arc;
use tracing::debug;

/// Trimmed, lowercased search term
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn matches(record: &ProcessRecord, term: &str) -> bool {
    [&record.processo, &record.tipo, &record.responsavel]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Records whose identifier, category or responsible party contains `term`
/// (case-insensitive), in their original order. An empty term keeps everything.
pub fn filter_processes<'a>(records: &'a [ProcessRecord], term: &str) -> Vec<&'a ProcessRecord> {
    let term = normalize_term(term);
    if term.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches(r, &term)).collect()
}

/// Handles input events from the search field.
///
/// Every event re-filters the complete current list; the list itself is never touched.
#[derive(Clone)]
pub struct SearchListener {
    processes: ProcessReader,
    view: Arc<dyn DashboardView>,
}

impl SearchListener {
    pub fn new(processes: ProcessReader, view: Arc<dyn DashboardView>) -> Self {
        Self { processes, view }
    }

    /// Table body for `raw` over the current list. Nothing is rendered.
    pub fn render(&self, raw: &str) -> TableBody {
        let snapshot = self.processes.snapshot();
        let shown = filter_processes(&snapshot, raw);
        debug!(target: "causa::search", term = %raw.trim(), shown = shown.len(), total = snapshot.len(), "Search input");
        table_body(shown)
    }

    /// Re-render the table for the field's current text. Returns how many records are shown.
    pub fn on_input(&self, raw: &str) -> usize {
        let body = self.render(raw);
        self.view.render_table(&body);
        body.rows().len()
    }
}
