use chartopts::compose::{compose_cartesian, CartesianChartRequest};
use chartopts::{Dataset, SeparatorDecoder, TextMeasurer};
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn line_request() -> CartesianChartRequest {
    let text = fs::read_to_string(fixture("line_request.json")).expect("Failed to read request fixture");
    serde_json::from_str(&text).expect("Failed to parse request fixture")
}

fn sales() -> Dataset {
    let file = fs::File::open(fixture("sales.csv")).expect("Failed to open CSV fixture");
    Dataset::from_csv_reader(file).expect("Failed to read CSV fixture")
}

struct FixedWidth(f64);

impl TextMeasurer for FixedWidth {
    fn measure_text_width(&self, _text: &str, _font_family: &str, _font_size_spec: &str) -> f64 {
        self.0
    }
}

/// Helper function to run the binary with a request file and data on stdin
fn run_chartopts(args: &[&str], stdin_data: &str) -> Result<Vec<u8>, String> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_chartopts"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to spawn process: {}", e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_data.as_bytes())
            .map_err(|e| format!("Failed to write to stdin: {}", e))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("Failed to wait for process: {}", e))?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(String::from_utf8_lossy(&output.stderr).to_string())
    }
}

#[test]
fn test_line_chart_from_csv() {
    let data = sales();
    let opts = compose_cartesian(&line_request(), &data.rows, &FixedWidth(40.0), &SeparatorDecoder::default())
        .expect("compose failed");

    assert_eq!(
        opts.x_axis.data,
        Some(vec!["2024-01".to_string(), "2024-02".to_string(), "2024-03".to_string()])
    );
    assert_eq!(opts.series.len(), 2);
    assert_eq!(opts.series[0].name, "north");
    // the second north/2024-02 row is a duplicate and is dropped
    assert_eq!(opts.series[0].data, vec![120.0, 95.0, 0.0]);
    assert_eq!(opts.series[1].name, "south");
    assert_eq!(opts.series[1].data, vec![0.0, 40.0, 55.0]);
}

#[test]
fn test_top_legend_grid_and_axis_title() {
    let data = sales();
    let opts = compose_cartesian(&line_request(), &data.rows, &FixedWidth(40.0), &SeparatorDecoder::default())
        .expect("compose failed");

    assert_eq!(opts.grid.top, 56.0);
    assert_eq!(opts.grid.left, 64.0);
    assert_eq!(opts.grid.right, 24.0);
    assert_eq!(opts.grid.bottom, 50.0);

    let v = serde_json::to_value(&opts).unwrap();
    assert_eq!(v["yAxis"]["name"], json!("sum(sales)"));
    assert_eq!(v["yAxis"]["nameLocation"], json!("middle"));
    assert_eq!(v["legend"]["selected"], json!({ "north": true, "south": true }));
    assert_eq!(v["series"][0]["type"], json!("line"));
    assert_eq!(v["series"][0]["label"]["emphasis"]["show"], json!(true));
}

#[test]
fn test_right_legend_uses_measurer() {
    let mut req = line_request();
    req.legend.legend_position = chartopts::LegendPosition::Right;
    let data = sales();
    let opts = compose_cartesian(&req, &data.rows, &FixedWidth(50.0), &SeparatorDecoder::default())
        .expect("compose failed");
    assert_eq!(opts.grid.right, 106.0);
    assert_eq!(opts.grid.top, 24.0);
}

#[test]
fn test_json_dataset_matches_csv() {
    let json_rows = json!([
        { "region": "north", "month": "2024-01", "sum(sales)": 120 },
        { "region": "north", "month": "2024-02", "sum(sales)": 95 },
        { "region": "south", "month": "2024-02", "sum(sales)": 40 },
        { "region": "south", "month": "2024-03", "sum(sales)": 55 },
        { "region": "north", "month": "2024-02", "sum(sales)": 999 }
    ]);
    let from_json = Dataset::from_json(&json_rows).unwrap();
    let req = line_request();
    let decoder = SeparatorDecoder::default();

    let a = compose_cartesian(&req, &from_json.rows, &FixedWidth(1.0), &decoder).unwrap();
    let b = compose_cartesian(&req, &sales().rows, &FixedWidth(1.0), &decoder).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_end_to_end_cli() {
    let csv = fs::read_to_string(fixture("sales.csv")).expect("Failed to read test CSV");
    let request = fixture("line_request.json");
    let result = run_chartopts(&["--request", request.to_str().unwrap(), "--estimate-text"], &csv);
    assert!(result.is_ok(), "Failed: {:?}", result.err());

    let v: Value = serde_json::from_slice(&result.unwrap()).expect("Output is not JSON");
    assert_eq!(v["xAxis"]["data"], json!(["2024-01", "2024-02", "2024-03"]));
    assert_eq!(v["series"][1]["data"], json!([0.0, 40.0, 55.0]));
    assert_eq!(v["grid"]["top"], json!(56.0));
}

#[test]
fn test_cli_rejects_bad_request() {
    let result = run_chartopts(&["--request", "/nonexistent/request.json"], "");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to read request file"));
}

#[test]
fn test_cli_logs_missing_group_column() {
    let request = fixture("line_request.json");
    let mut child = Command::new(env!("CARGO_BIN_EXE_chartopts"))
        .args(["--request", request.to_str().unwrap(), "--estimate-text"])
        .env("RUST_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn process");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"month,sum(sales)\n2024-01,5\n2024-02,7\n")
        .unwrap();
    let output = child.wait_with_output().expect("Failed to wait for process");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Column 'region' not found"), "stderr: {}", stderr);

    let v: Value = serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert_eq!(v["series"].as_array().unwrap().len(), 1);
    assert_eq!(v["series"][0]["data"], json!([5.0, 7.0]));
}
