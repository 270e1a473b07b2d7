use anyhow::{Context, Result};
use chartopts::compose::{compose_cartesian, CartesianChartRequest};
use chartopts::{DataFormat, Dataset, EstimatingTextMeasurer, PlottersTextMeasurer, SeparatorDecoder, TextMeasurer};
use clap::Parser;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chartopts")]
#[command(about = "Compute chart engine options from widget style settings and tabular data", long_about = None)]
struct Args {
    /// JSON file with the chart request (chart kind, columns, metrics, styles)
    #[arg(long)]
    request: PathBuf,

    /// Data file; read from stdin when omitted
    #[arg(long)]
    data: Option<PathBuf>,

    /// Format of the data
    #[arg(long, value_enum, default_value = "csv")]
    format: DataFormat,

    /// Separator between a metric name and its encoding suffix
    #[arg(long, default_value = chartopts::metric::DEFAULT_METRIC_SEPARATOR)]
    separator: String,

    /// Estimate text widths from character counts instead of loading fonts
    #[arg(long)]
    estimate_text: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let request_text = fs::read_to_string(&args.request)
        .with_context(|| format!("Failed to read request file {}", args.request.display()))?;
    let request: CartesianChartRequest =
        serde_json::from_str(&request_text).context("Failed to parse chart request")?;

    let dataset = match &args.data {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open data file {}", path.display()))?;
            Dataset::from_reader(file, args.format)?
        }
        None => Dataset::from_reader(io::stdin().lock(), args.format).context("Failed to read data from stdin")?,
    };

    let wanted = request
        .group_columns
        .iter()
        .chain(request.category_column.as_ref())
        .map(String::as_str);
    for name in dataset.missing_columns(wanted) {
        debug!("Column '{}' not found in data; its cells read as empty", name);
    }

    let measurer: &dyn TextMeasurer = if args.estimate_text {
        &EstimatingTextMeasurer
    } else {
        &PlottersTextMeasurer
    };
    let decoder = SeparatorDecoder::new(args.separator);

    let options = compose_cartesian(&request, &dataset.rows, measurer, &decoder)
        .context("Failed to compose chart options")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&options)?
    } else {
        serde_json::to_string(&options)?
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json).context("Failed to write options to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
