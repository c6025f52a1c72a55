// Loaders
//
// Each loader fetches one endpoint, turns the payload into display data and hands it to the
// view. Failures are logged and contained; nothing propagates to the caller.

use crate::api::{ChartSeries, ChartsPayload, DashboardApi, Envelope, KpiSummary};
use crate::format::{format_currency, format_number};
use crate::report::ErrorReporter;
use crate::state::ProcessWriter;
use crate::view::{
    bar_chart, pie_chart, table_body, ChartContainer, ChartFigure, DashboardView, KpiSlot,
    TableBody, CONNECTION_ERROR_MESSAGE, PROCESS_LOAD_ERROR_MESSAGE,
};
use tracing::{debug, error};

pub const KPI_LOAD_ERROR: &str = "Erro ao carregar KPIs";
pub const KPI_CONNECTION_ERROR: &str = "Erro de conexão ao carregar KPIs";
pub const CHART_LOAD_ERROR: &str = "Erro ao carregar gráficos";
pub const CHART_CONNECTION_ERROR: &str = "Erro de conexão ao carregar gráficos";

/// Which path a loader run took
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// `success == false`, or success without data
    ServerFailure,
    /// Transport failure or unreadable response
    ConnectionFailure,
}

/// Display text for the four KPI tiles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KpiDisplay {
    pub valor_andamento: String,
    pub total_entradas: String,
    pub saving: String,
    pub total_encerrados: String,
}

impl KpiDisplay {
    pub fn from_summary(summary: &KpiSummary) -> Self {
        Self {
            valor_andamento: format_currency(summary.valor_andamento),
            total_entradas: format_number(summary.total_entradas),
            saving: format_currency(summary.saving),
            total_encerrados: format_number(summary.total_encerrados),
        }
    }

    pub fn entries(&self) -> [(KpiSlot, &str); 4] {
        [
            (KpiSlot::ValorAndamento, self.valor_andamento.as_str()),
            (KpiSlot::TotalEntradas, self.total_entradas.as_str()),
            (KpiSlot::Saving, self.saving.as_str()),
            (KpiSlot::TotalEncerrados, self.total_encerrados.as_str()),
        ]
    }
}

/// Fetch `/api/kpis` and fill the four KPI slots
pub async fn load_kpis(
    api: &dyn DashboardApi,
    view: &dyn DashboardView,
    reporter: &dyn ErrorReporter,
) -> LoadOutcome {
    match api.fetch_kpis().await.and_then(Envelope::into_data) {
        Ok(summary) => {
            let display = KpiDisplay::from_summary(&summary);
            for (slot, text) in display.entries() {
                view.set_kpi(slot, text);
            }
            debug!(target: "causa::loaders", "KPIs updated");
            LoadOutcome::Loaded
        }
        Err(e) if e.is_server_reported() => {
            error!(target: "causa::loaders", error = %e, "Failed to fetch KPIs");
            reporter.report(KPI_LOAD_ERROR);
            LoadOutcome::ServerFailure
        }
        Err(e) => {
            error!(target: "causa::loaders", error = %e, "KPI request failed");
            reporter.report(KPI_CONNECTION_ERROR);
            LoadOutcome::ConnectionFailure
        }
    }
}

/// Series feeding `container`, if the payload carries a non-empty one
pub fn series_for(container: ChartContainer, charts: &ChartsPayload) -> Option<&ChartSeries> {
    let series = match container {
        ChartContainer::Top10 => charts.top10_causas.as_ref(),
        ChartContainer::Tipo => charts.valor_por_tipo.as_ref(),
        ChartContainer::Responsavel => charts.valor_por_responsavel.as_ref(),
    };
    series.filter(|s| !s.is_empty())
}

/// Figure for `container`: pie for the per-type split, bars for the others
pub fn figure_for(container: ChartContainer, series: &ChartSeries) -> ChartFigure {
    match container {
        ChartContainer::Tipo => pie_chart(series, container.title()),
        ChartContainer::Top10 | ChartContainer::Responsavel => bar_chart(series, container.title()),
    }
}

/// Fetch `/api/charts` and render every non-empty series. Empty or absent series are skipped
/// and their container keeps whatever it showed before.
pub async fn load_charts(
    api: &dyn DashboardApi,
    view: &dyn DashboardView,
    reporter: &dyn ErrorReporter,
) -> LoadOutcome {
    match api.fetch_charts().await.and_then(Envelope::into_data) {
        Ok(charts) => {
            for container in ChartContainer::ALL {
                match series_for(container, &charts) {
                    Some(series) => view.render_chart(container, &figure_for(container, series)),
                    None => {
                        debug!(target: "causa::loaders", container = container.element_id(), "Skipping empty series")
                    }
                }
            }
            LoadOutcome::Loaded
        }
        Err(e) if e.is_server_reported() => {
            error!(target: "causa::loaders", error = %e, "Failed to fetch charts");
            reporter.report(CHART_LOAD_ERROR);
            LoadOutcome::ServerFailure
        }
        Err(e) => {
            error!(target: "causa::loaders", error = %e, "Chart request failed");
            reporter.report(CHART_CONNECTION_ERROR);
            LoadOutcome::ConnectionFailure
        }
    }
}

/// Fetch `/api/processes`, replace the shared list and render the full table.
///
/// On failure the list is left as it was and the table shows an error row instead;
/// the shared error hook is not involved.
pub async fn load_processes(
    api: &dyn DashboardApi,
    processes: &ProcessWriter,
    view: &dyn DashboardView,
) -> LoadOutcome {
    match api.fetch_processes().await.and_then(Envelope::into_data) {
        Ok(records) => {
            let snapshot = processes.replace(records);
            view.render_table(&table_body(snapshot.iter()));
            debug!(target: "causa::loaders", count = snapshot.len(), "Processes updated");
            LoadOutcome::Loaded
        }
        Err(e) if e.is_server_reported() => {
            error!(target: "causa::loaders", error = %e, "Failed to fetch processes");
            view.render_table(&TableBody::Error(PROCESS_LOAD_ERROR_MESSAGE.to_string()));
            LoadOutcome::ServerFailure
        }
        Err(e) => {
            error!(target: "causa::loaders", error = %e, "Process request failed");
            view.render_table(&TableBody::Error(CONNECTION_ERROR_MESSAGE.to_string()));
            LoadOutcome::ConnectionFailure
        }
    }
}
