// View layer
//
// Loaders compute display data; everything that touches the page goes through `DashboardView`.

mod chart;
mod html;
mod table;

pub use chart::{
    bar_chart, pie_chart, pie_chart_with_hole, Axis, ChartFigure, Font, Layout, Margin, Marker,
    MarkerLine, PlotConfig, Title, Trace, DEFAULT_PIE_HOLE, PIE_PALETTE,
};
pub use html::{escape_html, HtmlView};
pub use table::{
    table_body, TableBody, TableRow, CONNECTION_ERROR_MESSAGE, NO_RESULTS_MESSAGE,
    PROCESS_LOAD_ERROR_MESSAGE,
};

pub const TABLE_BODY_ID: &str = "processes-tbody";
pub const SEARCH_INPUT_ID: &str = "search-input";

/// The four KPI text slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KpiSlot {
    ValorAndamento,
    TotalEntradas,
    Saving,
    TotalEncerrados,
}

impl KpiSlot {
    pub const ALL: [KpiSlot; 4] = [
        KpiSlot::ValorAndamento,
        KpiSlot::TotalEntradas,
        KpiSlot::Saving,
        KpiSlot::TotalEncerrados,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            KpiSlot::ValorAndamento => "kpi-valor-andamento",
            KpiSlot::TotalEntradas => "kpi-total-entradas",
            KpiSlot::Saving => "kpi-saving",
            KpiSlot::TotalEncerrados => "kpi-total-encerrados",
        }
    }
}

/// The three chart containers, each bound to one series of `/api/charts`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartContainer {
    Top10,
    Tipo,
    Responsavel,
}

impl ChartContainer {
    pub const ALL: [ChartContainer; 3] = [
        ChartContainer::Top10,
        ChartContainer::Tipo,
        ChartContainer::Responsavel,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            ChartContainer::Top10 => "chart-top10",
            ChartContainer::Tipo => "chart-tipo",
            ChartContainer::Responsavel => "chart-responsavel",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartContainer::Top10 => "Top 10 Causas por Valor",
            ChartContainer::Tipo => "Distribuição por Tipo de Ação",
            ChartContainer::Responsavel => "Valor por Responsável",
        }
    }
}

/// Presentation surface the loaders write to.
///
/// Writes are synchronous and replace whatever the target held before.
pub trait DashboardView: Send + Sync {
    fn set_kpi(&self, slot: KpiSlot, text: &str);

    fn render_chart(&self, container: ChartContainer, figure: &ChartFigure);

    fn render_table(&self, body: &TableBody);
}
