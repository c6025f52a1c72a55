// Chart figures
//
// Builds Plotly-compatible figure descriptions; the page hands them to `Plotly.newPlot`.

use crate::api::ChartSeries;
use crate::format::format_currency;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PIE_HOLE: f64 = 0.4;

/// Pie slice colours, cycled by index
pub const PIE_PALETTE: [&str; 10] = [
    "#3b82f6", "#8b5cf6", "#10b981", "#f59e0b", "#ef4444", "#06b6d4", "#ec4899", "#84cc16",
    "#f97316", "#6366f1",
];

const BAR_COLOR: &str = "#3b82f6";
const BAR_OUTLINE_COLOR: &str = "#2563eb";
const TITLE_COLOR: &str = "#1e293b";
const TITLE_SIZE: u32 = 16;
const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// `{data, layout, config}` triple for one chart container
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartFigure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

impl ChartFigure {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        x: Vec<String>,
        y: Vec<f64>,
        marker: Marker,
        text: Vec<String>,
        textposition: String,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        hole: f64,
        marker: Marker,
        text: Vec<String>,
        textinfo: String,
        textposition: String,
        hovertemplate: String,
        texttemplate: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub color: String,
    pub width: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub margin: Margin,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automargin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub responsive: bool,
    pub display_mode_bar: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            responsive: true,
            display_mode_bar: false,
        }
    }
}

fn title(text: &str) -> Title {
    Title {
        text: text.to_string(),
        font: Font {
            size: TITLE_SIZE,
            color: TITLE_COLOR.to_string(),
        },
    }
}

fn currency_labels(values: &[f64]) -> Vec<String> {
    values.iter().map(|v| format_currency(Some(*v))).collect()
}

/// Vertical bar chart, each bar annotated with its currency value
pub fn bar_chart(series: &ChartSeries, chart_title: &str) -> ChartFigure {
    let trace = Trace::Bar {
        x: series.labels.clone(),
        y: series.values.clone(),
        marker: Marker {
            color: Some(BAR_COLOR.to_string()),
            colors: None,
            line: Some(MarkerLine {
                color: BAR_OUTLINE_COLOR.to_string(),
                width: 1,
            }),
        },
        text: currency_labels(&series.values),
        textposition: "auto".to_string(),
    };

    let layout = Layout {
        title: title(chart_title),
        xaxis: Some(Axis {
            title: String::new(),
            tickangle: Some(-45),
            automargin: Some(true),
            tickformat: None,
        }),
        yaxis: Some(Axis {
            title: "Valor (R$)".to_string(),
            tickformat: Some(",.0f".to_string()),
            ..Axis::default()
        }),
        plot_bgcolor: TRANSPARENT.to_string(),
        paper_bgcolor: TRANSPARENT.to_string(),
        margin: Margin {
            l: 60,
            r: 30,
            t: 50,
            b: 100,
        },
    };

    ChartFigure {
        data: vec![trace],
        layout,
        config: PlotConfig::default(),
    }
}

/// Donut chart with the default hole ratio
pub fn pie_chart(series: &ChartSeries, chart_title: &str) -> ChartFigure {
    pie_chart_with_hole(series, chart_title, DEFAULT_PIE_HOLE)
}

/// Donut chart; `hole` is the inner radius as a fraction of the outer one (0 draws a full pie)
pub fn pie_chart_with_hole(series: &ChartSeries, chart_title: &str, hole: f64) -> ChartFigure {
    let trace = Trace::Pie {
        labels: series.labels.clone(),
        values: series.values.clone(),
        hole: hole.clamp(0.0, 1.0),
        marker: Marker {
            color: None,
            colors: Some(PIE_PALETTE.iter().map(|c| c.to_string()).collect()),
            line: None,
        },
        text: currency_labels(&series.values),
        textinfo: "label+percent".to_string(),
        textposition: "outside".to_string(),
        hovertemplate: "<b>%{label}</b><br>Valor: %{text}<extra></extra>".to_string(),
        texttemplate: "<b>%{label}</b><br>%{text}".to_string(),
    };

    let layout = Layout {
        title: title(chart_title),
        xaxis: None,
        yaxis: None,
        plot_bgcolor: TRANSPARENT.to_string(),
        paper_bgcolor: TRANSPARENT.to_string(),
        margin: Margin {
            l: 30,
            r: 30,
            t: 50,
            b: 30,
        },
    };

    ChartFigure {
        data: vec![trace],
        layout,
        config: PlotConfig::default(),
    }
}
