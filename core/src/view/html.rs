// HTML view
//
// Keeps the page as an in-memory document keyed by element id and renders it as markup.

use super::{ChartContainer, ChartFigure, DashboardView, KpiSlot, TableBody, TABLE_BODY_ID};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

const PAGE_TEMPLATE: &str = include_str!("static/index.html");
const KPI_PLACEHOLDER: &str = "--";
const LOADING_MESSAGE: &str = "Carregando...";
const CHART_SCRIPTS_PLACEHOLDER: &str = "chart-scripts";

const CELL_CLASSES: [&str; 5] = [
    "px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900",
    "px-6 py-4 whitespace-nowrap text-sm text-gray-900 font-semibold",
    "px-6 py-4 text-sm text-gray-500",
    "px-6 py-4 whitespace-nowrap text-sm text-gray-500",
    "px-6 py-4 text-sm text-gray-500",
];

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// JSON safe to inline inside a <script> element: no raw `<` survives
fn script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value).map(|s| s.replace('<', "\\u003c"))
}

/// Fill `{{name}}` placeholders in a single pass. Substituted text is never rescanned,
/// and unknown placeholders are kept as written.
fn fill_template(template: &str, mut value_for: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match value_for(name) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn message_row(message: &str, color_class: &str) -> String {
    format!(
        r#"<tr><td colspan="5" class="px-6 py-4 text-center {}">{}</td></tr>"#,
        color_class,
        escape_html(message)
    )
}

#[derive(Default)]
struct Document {
    kpis: HashMap<KpiSlot, String>,
    charts: HashMap<ChartContainer, ChartFigure>,
    table: Option<TableBody>,
}

/// `DashboardView` backed by an in-memory page
#[derive(Default)]
pub struct HtmlView {
    document: RwLock<Document>,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Document> {
        self.document.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Document> {
        self.document.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn kpi_text(&self, slot: KpiSlot) -> Option<String> {
        self.read().kpis.get(&slot).cloned()
    }

    pub fn chart(&self, container: ChartContainer) -> Option<ChartFigure> {
        self.read().charts.get(&container).cloned()
    }

    pub fn table(&self) -> Option<TableBody> {
        self.read().table.clone()
    }

    /// Inner markup of the table body
    pub fn table_html(&self) -> String {
        match &self.read().table {
            Some(body) => Self::render_table_body(body),
            None => message_row(LOADING_MESSAGE, "text-gray-500"),
        }
    }

    /// Markup for a table body that need not be the one in the document
    pub fn render_table_body(body: &TableBody) -> String {
        match body {
            TableBody::NoResults => message_row(super::NO_RESULTS_MESSAGE, "text-gray-500"),
            TableBody::Error(message) => message_row(message, "text-red-500"),
            TableBody::Rows(rows) => rows
                .iter()
                .map(|row| {
                    let cells: String = row
                        .cells()
                        .iter()
                        .zip(CELL_CLASSES.iter())
                        .map(|(text, class)| {
                            format!(r#"<td class="{}">{}</td>"#, class, escape_html(text))
                        })
                        .collect();
                    format!(r#"<tr class="hover:bg-gray-50">{}</tr>"#, cells)
                })
                .collect(),
        }
    }

    /// `Plotly.newPlot` call for one container, if it has been rendered
    pub fn chart_script(&self, container: ChartContainer) -> Option<String> {
        let figure = self.chart(container)?;
        match (
            script_json(&figure.data),
            script_json(&figure.layout),
            script_json(&figure.config),
        ) {
            (Ok(data), Ok(layout), Ok(config)) => Some(format!(
                "Plotly.newPlot('{}', {}, {}, {});",
                container.element_id(),
                data,
                layout,
                config
            )),
            _ => {
                warn!(target: "causa::view", container = container.element_id(), "Failed to serialize chart figure");
                None
            }
        }
    }

    /// Full page with the current document state
    pub fn render_page(&self) -> String {
        fill_template(PAGE_TEMPLATE, |name| {
            if name == TABLE_BODY_ID {
                return Some(self.table_html());
            }
            if name == CHART_SCRIPTS_PLACEHOLDER {
                let scripts: Vec<String> = ChartContainer::ALL
                    .iter()
                    .filter_map(|c| self.chart_script(*c))
                    .collect();
                return Some(scripts.join("\n"));
            }
            let slot = KpiSlot::ALL.into_iter().find(|s| s.element_id() == name)?;
            let text = self
                .kpi_text(slot)
                .unwrap_or_else(|| KPI_PLACEHOLDER.to_string());
            Some(escape_html(&text))
        })
    }
}

impl DashboardView for HtmlView {
    fn set_kpi(&self, slot: KpiSlot, text: &str) {
        self.write().kpis.insert(slot, text.to_string());
    }

    fn render_chart(&self, container: ChartContainer, figure: &ChartFigure) {
        self.write().charts.insert(container, figure.clone());
    }

    fn render_table(&self, body: &TableBody) {
        self.write().table = Some(body.clone());
    }
}
