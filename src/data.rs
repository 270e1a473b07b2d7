use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use csv::ReaderBuilder;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::io::Read;
use tracing::debug;
use crate::group::{number_text, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    #[default]
    Csv,
    Json,
}

/// Tabular input: rows in input order, plus every column name seen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, rows }
    }

    /// Create a Dataset from a JSON array of objects
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        let mut rows = Vec::with_capacity(array.len());
        for (idx, item) in array.iter().enumerate() {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Item {} in data array is not an object", idx))?;
            rows.push(obj.clone());
        }

        Ok(Self::new(rows))
    }

    /// Read CSV with a header row. Cells written as plain numbers become numbers.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV headers")?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.with_context(|| format!("Failed to read CSV record {}", idx + 1))?;
            let row: Row = headers
                .iter()
                .zip(record.iter())
                .map(|(h, cell)| (h.clone(), infer_cell(cell)))
                .collect();
            rows.push(row);
        }

        debug!("Read {} CSV rows with {} columns", rows.len(), headers.len());
        Ok(Self { columns: headers, rows })
    }

    /// Names from `wanted` that no row carries, in the order given
    pub fn missing_columns<'a>(&self, wanted: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        wanted
            .into_iter()
            .filter(|name| !self.columns.iter().any(|c| c == name))
            .collect()
    }

    pub fn from_reader<R: Read>(mut reader: R, format: DataFormat) -> Result<Self> {
        match format {
            DataFormat::Csv => Self::from_csv_reader(reader),
            DataFormat::Json => {
                let mut text = String::new();
                reader
                    .read_to_string(&mut text)
                    .context("Failed to read JSON data")?;
                let value: Value = serde_json::from_str(&text).context("Failed to parse JSON data")?;
                Self::from_json(&value)
            }
        }
    }
}

/// A cell becomes a number only when the number prints back as the same text,
/// so `007` or `1.0` stay strings and keep their identity as categories.
fn infer_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    let number = match trimmed.parse::<i64>() {
        Ok(i) => Some(Number::from(i)),
        Err(_) => trimmed.parse::<f64>().ok().and_then(Number::from_f64),
    };

    match number {
        Some(n) if number_text(&n) == trimmed => Value::Number(n),
        _ => Value::String(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::distinct_categories;
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn test_from_json_array() {
        let data = Dataset::from_json(&json!([{ "a": 1, "b": "x" }, { "a": 2, "c": true }])).unwrap();
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.columns, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        let result = Dataset::from_json(&json!([{ "a": 1 }, 3]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not an object"));

        let result = Dataset::from_json(&json!({ "a": 1 }));
        assert!(result.unwrap_err().to_string().contains("JSON array"));
    }

    #[test]
    fn test_from_json_empty_array() {
        let data = Dataset::from_json(&json!([])).unwrap();
        assert!(data.rows.is_empty());
    }

    #[test]
    fn test_csv_infers_numbers() {
        let data = Dataset::from_csv_reader(Cursor::new("region,month,sales\nnorth,2024-01,12\nsouth,2024-01,3.5\n")).unwrap();
        assert_eq!(data.columns, vec!["region", "month", "sales"]);
        assert_eq!(data.rows[0]["sales"], json!(12));
        assert_eq!(data.rows[1]["sales"], json!(3.5));
        assert_eq!(data.rows[0]["month"], json!("2024-01"));
    }

    #[test]
    fn test_csv_keeps_non_canonical_numbers_as_text() {
        let data = Dataset::from_csv_reader(Cursor::new("code,m\n007,1\n7,2\n1.0,3\n1,4\n1e3,5\n")).unwrap();
        assert_eq!(data.rows[0]["code"], json!("007"));
        assert_eq!(data.rows[1]["code"], json!(7));
        assert_eq!(data.rows[2]["code"], json!("1.0"));
        assert_eq!(data.rows[3]["code"], json!(1));
        assert_eq!(data.rows[4]["code"], json!("1e3"));
        assert_eq!(
            distinct_categories(&data.rows, Some("code")),
            vec!["007", "7", "1.0", "1", "1e3"]
        );
    }

    #[test]
    fn test_csv_keeps_non_finite_as_text() {
        let data = Dataset::from_csv_reader(Cursor::new("v\nNaN\ninf\n")).unwrap();
        assert_eq!(data.rows[0]["v"], json!("NaN"));
        assert_eq!(data.rows[1]["v"], json!("inf"));
    }

    #[test]
    fn test_csv_short_row_is_an_error() {
        let result = Dataset::from_csv_reader(Cursor::new("x,y,z\n1,10,100\n2,20"));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_columns() {
        let data = Dataset::from_csv_reader(Cursor::new("region,month,sales\nnorth,jan,1\n")).unwrap();
        assert_eq!(data.missing_columns(["region", "city", "month", "day"]), vec!["city", "day"]);
        assert!(data.missing_columns(["sales"]).is_empty());

        let empty = Dataset::from_json(&json!([])).unwrap();
        assert_eq!(empty.missing_columns(["region"]), vec!["region"]);
    }

    #[test]
    fn test_from_reader_json() {
        let data = Dataset::from_reader(Cursor::new(r#"[{"g":"A"}]"#), DataFormat::Json).unwrap();
        assert_eq!(data.rows[0]["g"], json!("A"));
    }
}
