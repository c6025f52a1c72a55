// Process table rows

use crate::api::ProcessRecord;
use crate::format::format_currency;

pub const NO_RESULTS_MESSAGE: &str = "Nenhum processo encontrado";
pub const PROCESS_LOAD_ERROR_MESSAGE: &str = "Erro ao carregar processos";
pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão";

/// One rendered record: five display cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub processo: String,
    pub valor: String,
    pub tipo: String,
    pub data: String,
    pub responsavel: String,
}

impl TableRow {
    pub fn from_record(record: &ProcessRecord) -> Self {
        Self {
            processo: record.processo.clone(),
            valor: format_currency(record.valor),
            tipo: record.tipo.clone(),
            data: record.data.clone(),
            responsavel: record.responsavel.clone(),
        }
    }

    pub fn cells(&self) -> [&str; 5] {
        [
            self.processo.as_str(),
            self.valor.as_str(),
            self.tipo.as_str(),
            self.data.as_str(),
            self.responsavel.as_str(),
        ]
    }
}

/// Contents of the table body
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<TableRow>),
    NoResults,
    Error(String),
}

impl TableBody {
    /// Rows the body occupies; the message variants take a single spanning row
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            TableBody::NoResults | TableBody::Error(_) => 1,
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        match self {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Table contents for `records`, in the order given. No sorting, no paging.
pub fn table_body<'a, I>(records: I) -> TableBody
where
    I: IntoIterator<Item = &'a ProcessRecord>,
{
    let rows: Vec<TableRow> = records.into_iter().map(TableRow::from_record).collect();
    if rows.is_empty() {
        TableBody::NoResults
    } else {
        TableBody::Rows(rows)
    }
}
