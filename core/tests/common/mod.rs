//! Shared fixtures for the dashboard tests
#![allow(dead_code)]

use causa_core::view::{ChartContainer, ChartFigure, DashboardView, KpiSlot, TableBody};
use causa_core::{ErrorReporter, ProcessRecord};
use std::sync::Mutex;

/// One write the view received
#[derive(Clone, Debug, PartialEq)]
pub enum ViewCall {
    Kpi(KpiSlot, String),
    Chart(ChartContainer, ChartFigure),
    Table(TableBody),
}

/// View that records every write in order
#[derive(Default)]
pub struct RecordingView {
    calls: Mutex<Vec<ViewCall>>,
}

impl RecordingView {
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn chart_calls(&self, container: ChartContainer) -> Vec<ChartFigure> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ViewCall::Chart(target, figure) if target == container => Some(figure),
                _ => None,
            })
            .collect()
    }

    pub fn last_table(&self) -> Option<TableBody> {
        self.calls().into_iter().rev().find_map(|c| match c {
            ViewCall::Table(body) => Some(body),
            _ => None,
        })
    }

    pub fn kpi(&self, slot: KpiSlot) -> Option<String> {
        self.calls().into_iter().rev().find_map(|c| match c {
            ViewCall::Kpi(target, text) if target == slot => Some(text),
            _ => None,
        })
    }
}

impl DashboardView for RecordingView {
    fn set_kpi(&self, slot: KpiSlot, text: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(ViewCall::Kpi(slot, text.to_string()));
    }

    fn render_chart(&self, container: ChartContainer, figure: &ChartFigure) {
        self.calls
            .lock()
            .unwrap()
            .push(ViewCall::Chart(container, figure.clone()));
    }

    fn render_table(&self, body: &TableBody) {
        self.calls.lock().unwrap().push(ViewCall::Table(body.clone()));
    }
}

/// Error hook that remembers what it was told
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn process(processo: &str, valor: f64, tipo: &str, data: &str, responsavel: &str) -> ProcessRecord {
    ProcessRecord {
        processo: processo.to_string(),
        valor: Some(valor),
        tipo: tipo.to_string(),
        data: data.to_string(),
        responsavel: responsavel.to_string(),
    }
}
