// Full option object for a cartesian (category x value) chart

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::axis::{build_category_axis, build_value_axis, AxisDescriptor};
use crate::config::{
    AxisOrientation, AxisStyleConfig, ChartKind, LabelStyleConfig, LegendStyleConfig, SplitLineConfig,
};
use crate::grid::{compute_grid_insets, GridInsets};
use crate::group::{distinct_categories, group_by_category, numeric_cell, Row};
use crate::label::{build_label, LabelDescriptor};
use crate::legend::{build_legend, LegendDescriptor};
use crate::measure::TextMeasurer;
use crate::metric::{Metric, MetricNameDecoder};
use crate::symbol::symbol_size;

const DEFAULT_SYMBOL_SIZE: f64 = 10.0;

/// Everything the workbench knows about one cartesian widget
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianChartRequest {
    pub chart_kind: ChartKind,
    #[serde(default)]
    pub group_columns: Vec<String>,
    #[serde(default)]
    pub category_column: Option<String>,
    pub metrics: Vec<Metric>,
    pub x_axis: AxisStyleConfig,
    pub y_axis: AxisStyleConfig,
    pub split_line: SplitLineConfig,
    pub label: LabelStyleConfig,
    pub legend: LegendStyleConfig,
    #[serde(default)]
    pub symbol_size: Option<f64>,
    #[serde(default)]
    pub size_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: Vec<f64>,
    pub label: LabelDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub x_axis: AxisDescriptor,
    pub y_axis: AxisDescriptor,
    pub legend: LegendDescriptor,
    pub grid: GridInsets,
    pub series: Vec<SeriesOption>,
}

fn series_name(group: &str, metric_display: &str, metric_count: usize) -> String {
    if group.is_empty() {
        metric_display.to_string()
    } else if metric_count == 1 {
        group.to_string()
    } else {
        format!("{} {}", group, metric_display)
    }
}

pub fn compose_cartesian(
    request: &CartesianChartRequest,
    data: &[Row],
    measurer: &dyn TextMeasurer,
    decoder: &dyn MetricNameDecoder,
) -> Result<ChartOptions> {
    let kind = request.chart_kind;
    let symbol = match kind {
        ChartKind::Line | ChartKind::Bar => None,
        ChartKind::Scatter => Some(symbol_size(
            request.size_rate,
            request.symbol_size.unwrap_or(DEFAULT_SYMBOL_SIZE),
        )),
        ChartKind::Pie
        | ChartKind::Funnel
        | ChartKind::Radar
        | ChartKind::Sankey
        | ChartKind::Parallel
        | ChartKind::WordCloud
        | ChartKind::Waterfall
        | ChartKind::DoubleYAxis => bail!("'{}' is not a single-axis cartesian chart", kind),
    };

    if request.metrics.is_empty() {
        bail!("A cartesian chart needs at least one metric");
    }

    let category_column = request.category_column.as_deref();
    let categories = distinct_categories(data, category_column);
    let grouped = group_by_category(
        data,
        &request.group_columns,
        category_column.unwrap_or_default(),
        &request.metrics,
        &categories,
        decoder,
    );

    let displays: Vec<String> = request.metrics.iter().map(|m| m.display_key(decoder)).collect();
    let label = build_label(kind, &request.label, true, None);

    let mut series = Vec::new();
    for (group, rows) in grouped.iter() {
        for display in &displays {
            series.push(SeriesOption {
                name: series_name(group, display, displays.len()),
                kind: kind.as_str(),
                data: rows.iter().map(|row| numeric_cell(row, display)).collect(),
                label: label.clone(),
                symbol_size: symbol,
            });
        }
    }

    let series_names: Vec<String> = series.iter().map(|s| s.name.clone()).collect();
    debug!(
        "Composed {} chart: {} categories, {} groups, {} series",
        kind,
        categories.len(),
        grouped.len(),
        series.len()
    );

    Ok(ChartOptions {
        x_axis: build_category_axis(&request.x_axis, &request.split_line, &categories),
        y_axis: build_value_axis(&request.y_axis, &request.split_line, &displays.join(", "), AxisOrientation::Y),
        legend: build_legend(&request.legend, &series_names),
        grid: compute_grid_insets(&request.legend, &series_names, measurer),
        series,
    })
}
