// User-editable style settings, deserialized from the workbench JSON

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Visual settings of one axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisStyleConfig {
    pub show_line: bool,
    pub line_style: String,
    #[serde(deserialize_with = "string_or_number")]
    pub line_size: String,
    pub line_color: String,
    pub show_label: bool,
    pub label_font_family: String,
    #[serde(deserialize_with = "string_or_number")]
    pub label_font_size: String,
    pub label_color: String,
    #[serde(default)]
    pub show_title_and_unit: Option<bool>,
    #[serde(default)]
    pub title_font_family: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub title_font_size: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
}

/// Gridline settings shared by both axes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLineConfig {
    pub show_line: bool,
    pub line_style: String,
    #[serde(deserialize_with = "string_or_number")]
    pub line_size: String,
    pub line_color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyleConfig {
    pub show_label: bool,
    pub label_position: String,
    pub label_font_family: String,
    #[serde(deserialize_with = "string_or_number")]
    pub label_font_size: String,
    pub label_color: String,
    pub pie_label_position: PieLabelPosition,
    pub funnel_label_position: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendStyleConfig {
    pub show_legend: bool,
    pub legend_position: LegendPosition,
    pub select_all: bool,
    pub font_family: String,
    #[serde(deserialize_with = "string_or_number")]
    pub font_size: String,
    pub color: String,
}

/// Where the legend sits relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl LegendPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::Top => "top",
            LegendPosition::Bottom => "bottom",
            LegendPosition::Left => "left",
            LegendPosition::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieLabelPosition {
    Outside,
    Inside,
    Center,
}

impl PieLabelPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PieLabelPosition::Outside => "outside",
            PieLabelPosition::Inside => "inside",
            PieLabelPosition::Center => "center",
        }
    }
}

/// Chart kinds the workbench can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
    Pie,
    Funnel,
    Radar,
    Sankey,
    Parallel,
    WordCloud,
    Waterfall,
    DoubleYAxis,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
            ChartKind::Pie => "pie",
            ChartKind::Funnel => "funnel",
            ChartKind::Radar => "radar",
            ChartKind::Sankey => "sankey",
            ChartKind::Parallel => "parallel",
            ChartKind::WordCloud => "wordCloud",
            ChartKind::Waterfall => "waterfall",
            ChartKind::DoubleYAxis => "doubleYAxis",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let kind = match s {
            "line" => ChartKind::Line,
            "bar" => ChartKind::Bar,
            "scatter" => ChartKind::Scatter,
            "pie" => ChartKind::Pie,
            "funnel" => ChartKind::Funnel,
            "radar" => ChartKind::Radar,
            "sankey" => ChartKind::Sankey,
            "parallel" => ChartKind::Parallel,
            "wordCloud" => ChartKind::WordCloud,
            "waterfall" => ChartKind::Waterfall,
            "doubleYAxis" => ChartKind::DoubleYAxis,
            other => anyhow::bail!("Unknown chart kind '{}'", other),
        };
        Ok(kind)
    }
}

/// Which screen axis a value axis is drawn along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    X,
    #[default]
    Y,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(v: StringOrNumber) -> Self {
        match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}
