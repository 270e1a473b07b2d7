use serde::{Deserialize, Serialize};
use crate::parser::strip_encoding;

/// Separator the workbench uses between a metric's column name and its encoding suffix
pub const DEFAULT_METRIC_SEPARATOR: &str = "@@";

/// One measured quantity: an internal column name plus its aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub agg: String,
}

impl Metric {
    pub fn new(name: impl Into<String>, agg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agg: agg.into(),
        }
    }

    /// Column key under which aggregated rows carry this metric, e.g. `sum(revenue)`
    pub fn display_key(&self, decoder: &dyn MetricNameDecoder) -> String {
        format!("{}({})", self.agg, decoder.decode(&self.name))
    }
}

/// Turns an internal metric identifier into its display name
pub trait MetricNameDecoder {
    fn decode(&self, raw: &str) -> String;
}

impl<F> MetricNameDecoder for F
where
    F: Fn(&str) -> String,
{
    fn decode(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Keeps everything before the first separator occurrence
#[derive(Debug, Clone)]
pub struct SeparatorDecoder {
    separator: String,
}

impl SeparatorDecoder {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for SeparatorDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_METRIC_SEPARATOR)
    }
}

impl MetricNameDecoder for SeparatorDecoder {
    fn decode(&self, raw: &str) -> String {
        strip_encoding(raw, &self.separator).to_string()
    }
}
