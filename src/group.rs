// Regrouping of tabular rows into dense per-series matrices

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::{HashMap, HashSet};
use tracing::debug;
use crate::metric::{Metric, MetricNameDecoder};

/// One source record: column name to scalar value
pub type Row = Map<String, Value>;

/// Text of a number as the front-end prints it (`3`, not `3.0`)
pub(crate) fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => format!("{}", f),
        None => n.to_string(),
    }
}

/// Key text of a cell used as a category. Null and missing cells have none.
pub fn category_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Group key of a row: the grouping cells joined by a single space.
/// Null or missing cells contribute an empty string.
pub fn group_key(row: &Row, group_columns: &[String]) -> String {
    group_columns
        .iter()
        .map(|col| row.get(col).and_then(category_key).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numeric reading of a cell; non-numeric or missing cells read as 0
pub fn numeric_cell(row: &Row, column: &str) -> f64 {
    match row.get(column) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Distinct values of `category_column` in first-seen order.
/// Without a category column there is nothing to enumerate.
pub fn distinct_categories(data: &[Row], category_column: Option<&str>) -> Vec<String> {
    let Some(column) = category_column else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    for row in data {
        if let Some(key) = row.get(column).and_then(category_key) {
            if seen.insert(key.clone()) {
                categories.push(key);
            }
        }
    }
    categories
}

/// Dense per-group rows, one per category, groups in first-seen order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedMatrix {
    groups: Vec<(String, Vec<Row>)>,
}

impl GroupedMatrix {
    pub fn get(&self, key: &str) -> Option<&[Row]> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, rows)| rows.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Row])> {
        self.groups.iter().map(|(k, rows)| (k.as_str(), rows.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for GroupedMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, rows) in &self.groups {
            map.serialize_entry(key, rows)?;
        }
        map.end()
    }
}

/// Placeholder row for a missing (group, category) pair: every metric at 0
fn zero_row(metrics: &[Metric], decoder: &dyn MetricNameDecoder) -> Row {
    metrics
        .iter()
        .map(|m| (m.display_key(decoder), Value::from(0)))
        .collect()
}

/// Align every observed group to `categories`.
///
/// The first row seen for a (group, category) pair is kept; later rows for
/// the same pair are dropped. Groups absent from `data` never appear.
pub fn group_by_category(
    data: &[Row],
    group_columns: &[String],
    category_column: &str,
    metrics: &[Metric],
    categories: &[String],
    decoder: &dyn MetricNameDecoder,
) -> GroupedMatrix {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, HashMap<String, &Row>)> = Vec::new();
    let mut dropped = 0usize;

    for row in data {
        let key = group_key(row, group_columns);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            buckets.push((key, HashMap::new()));
            buckets.len() - 1
        });

        let Some(category) = row.get(category_column).and_then(category_key) else {
            continue;
        };
        let bucket = &mut buckets[slot].1;
        if bucket.contains_key(&category) {
            dropped += 1;
        } else {
            bucket.insert(category, row);
        }
    }

    if dropped > 0 {
        debug!("Dropped {} duplicate rows while grouping by '{}'", dropped, category_column);
    }

    let zero = zero_row(metrics, decoder);
    let groups = buckets
        .into_iter()
        .map(|(key, by_category)| {
            let rows = categories
                .iter()
                .map(|cat| match by_category.get(cat) {
                    Some(row) => (*row).clone(),
                    None => zero.clone(),
                })
                .collect();
            (key, rows)
        })
        .collect();

    GroupedMatrix { groups }
}
