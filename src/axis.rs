use serde::Serialize;
use crate::config::{AxisOrientation, AxisStyleConfig, SplitLineConfig};

/// Line stroke settings as the engine expects them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    pub show: bool,
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickLineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    pub show: bool,
    pub line_style: TickLineStyle,
}

/// Named reference to a host-side label formatter.
/// Passed through to the engine, never invoked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelFormatter {
    #[serde(rename = "metricAxisLabel")]
    MetricAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub show: bool,
    pub color: String,
    pub font_family: String,
    pub font_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<LabelFormatter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
}

/// Axis title block. `name` is always present, empty when the title is hidden.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTitle {
    pub name: String,
    pub name_location: &'static str,
    pub name_gap: u32,
    pub name_text_style: NameTextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

/// Renderer-ready axis option
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    pub axis_label: AxisLabel,
    pub axis_line: AxisLine,
    pub axis_tick: AxisTick,
    #[serde(flatten)]
    pub title: Option<AxisTitle>,
    pub split_line: AxisLine,
}

fn axis_line(cfg: &AxisStyleConfig) -> AxisLine {
    AxisLine {
        show: cfg.show_line,
        line_style: LineStyle {
            color: cfg.line_color.clone(),
            width: cfg.line_size.clone(),
            kind: cfg.line_style.clone(),
        },
    }
}

fn axis_tick(cfg: &AxisStyleConfig) -> AxisTick {
    AxisTick {
        show: cfg.show_line,
        line_style: TickLineStyle {
            color: cfg.line_color.clone(),
        },
    }
}

fn axis_label(cfg: &AxisStyleConfig, formatter: Option<LabelFormatter>) -> AxisLabel {
    AxisLabel {
        show: cfg.show_label,
        color: cfg.label_color.clone(),
        font_family: cfg.label_font_family.clone(),
        font_size: cfg.label_font_size.clone(),
        formatter,
    }
}

fn split_line(cfg: &SplitLineConfig) -> AxisLine {
    AxisLine {
        show: cfg.show_line,
        line_style: LineStyle {
            color: cfg.line_color.clone(),
            width: cfg.line_size.clone(),
            kind: cfg.line_style.clone(),
        },
    }
}

/// Category (dimension) axis. `categories` is emitted in the order given.
pub fn build_category_axis(
    axis_config: &AxisStyleConfig,
    split_line_config: &SplitLineConfig,
    categories: &[String],
) -> AxisDescriptor {
    AxisDescriptor {
        kind: None,
        data: Some(categories.to_vec()),
        axis_label: axis_label(axis_config, None),
        axis_line: axis_line(axis_config),
        axis_tick: axis_tick(axis_config),
        title: None,
        split_line: split_line(split_line_config),
    }
}

/// Value (metric) axis with a title block anchored by orientation
pub fn build_value_axis(
    axis_config: &AxisStyleConfig,
    split_line_config: &SplitLineConfig,
    title: &str,
    orientation: AxisOrientation,
) -> AxisDescriptor {
    let show_title = axis_config.show_title_and_unit.unwrap_or(false);
    let (name_location, name_gap) = match orientation {
        AxisOrientation::Y => ("middle", 45),
        AxisOrientation::X => ("center", 30),
    };

    AxisDescriptor {
        kind: Some(AxisKind::Value),
        data: None,
        axis_label: axis_label(axis_config, Some(LabelFormatter::MetricAxis)),
        axis_line: axis_line(axis_config),
        axis_tick: axis_tick(axis_config),
        title: Some(AxisTitle {
            name: if show_title { title.to_string() } else { String::new() },
            name_location,
            name_gap,
            name_text_style: NameTextStyle {
                color: axis_config.title_color.clone(),
                font_family: axis_config.title_font_family.clone(),
                font_size: axis_config.title_font_size.clone(),
            },
        }),
        split_line: split_line(split_line_config),
    }
}

/// Compact a value-axis tick: 1234567 -> "1.2M", 12500 -> "12K", 3.14159 -> "3.1"
pub fn format_metric_axis_label(value: f64) -> String {
    // (threshold, divisor, suffix); thousands only compact from five digits up
    const UNITS: [(f64, f64, &str); 4] = [
        (1e12, 1e12, "T"),
        (1e9, 1e9, "B"),
        (1e6, 1e6, "M"),
        (1e4, 1e3, "K"),
    ];

    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    for (threshold, divisor, suffix) in UNITS {
        if magnitude >= threshold {
            return format!("{}{}{}", sign, precision(magnitude / divisor), suffix);
        }
    }
    format!("{}{}", sign, precision(magnitude))
}

fn precision(n: f64) -> String {
    if n >= 10.0 {
        format!("{}", n.floor())
    } else {
        format!("{:.1}", n)
    }
}
