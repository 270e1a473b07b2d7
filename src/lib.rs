// Library exports for chartopts

pub mod config;
pub mod data;
pub mod metric;
pub mod parser;

// Option builders
pub mod axis;
pub mod label;
pub mod legend;
pub mod symbol;

// Layout and data shaping
pub mod compose;
pub mod grid;
pub mod group;
pub mod measure;

pub use config::{
    AxisOrientation, AxisStyleConfig, ChartKind, LabelStyleConfig, LegendPosition, LegendStyleConfig,
    PieLabelPosition, SplitLineConfig,
};
pub use data::{DataFormat, Dataset};
pub use group::{distinct_categories, group_by_category, GroupedMatrix, Row};
pub use measure::{EstimatingTextMeasurer, PlottersTextMeasurer, TextMeasurer};
pub use metric::{Metric, MetricNameDecoder, SeparatorDecoder};
