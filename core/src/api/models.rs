// Payload models for the three endpoints

use serde::{Deserialize, Deserializer, Serialize};

/// `/api/kpis` payload. Absent or null metrics display as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    #[serde(default)]
    pub valor_andamento: Option<f64>,
    #[serde(default)]
    pub total_entradas: Option<f64>,
    #[serde(default)]
    pub saving: Option<f64>,
    #[serde(default)]
    pub total_encerrados: Option<f64>,
}

/// One chart's (label, value) pairs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    /// Null points plot as zero
    #[serde(default, deserialize_with = "nulls_as_zero")]
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// `/api/charts` payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartsPayload {
    #[serde(default)]
    pub top10_causas: Option<ChartSeries>,
    #[serde(default)]
    pub valor_por_tipo: Option<ChartSeries>,
    #[serde(default)]
    pub valor_por_responsavel: Option<ChartSeries>,
}

/// One row of `/api/processes`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub processo: String,
    #[serde(default)]
    pub valor: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tipo: String,
    /// Display-only, never parsed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub responsavel: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nulls_as_zero<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<f64>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().map(|v| v.unwrap_or(0.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn process_record_tolerates_nulls_and_extra_fields() {
        let record: ProcessRecord = serde_json::from_value(json!({
            "processo": "0001234-56.2023.8.26.0100",
            "valor": null,
            "tipo": null,
            "data": "12/03/2023",
            "responsavel": "Ana",
            "vara": "3ª Vara Cível"
        }))
        .unwrap();
        assert_eq!(record.valor, None);
        assert_eq!(record.tipo, "");
        assert_eq!(record.data, "12/03/2023");
    }

    #[test]
    fn charts_payload_allows_missing_series() {
        let payload: ChartsPayload = serde_json::from_value(json!({
            "valor_por_tipo": {"labels": ["Trabalhista"], "values": [10.0]}
        }))
        .unwrap();
        assert!(payload.top10_causas.is_none());
        assert_eq!(payload.valor_por_tipo.unwrap().labels, vec!["Trabalhista"]);
    }

    #[test]
    fn null_chart_points_decode_as_zero() {
        let payload: ChartsPayload = serde_json::from_str(
            r#"{"top10_causas": {"labels": ["A", "B"], "values": [10, null]}, "valor_por_tipo": {"labels": [], "values": null}}"#,
        )
        .unwrap();
        assert_eq!(payload.top10_causas.unwrap().values, vec![10.0, 0.0]);
        assert!(payload.valor_por_tipo.unwrap().is_empty());
    }
}
