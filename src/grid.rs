// Plot-area insets from legend geometry

use serde::Serialize;
use tracing::debug;
use crate::config::{LegendPosition, LegendStyleConfig};
use crate::legend::LEGEND_BAR_HEIGHT;
use crate::measure::TextMeasurer;

/// Padding around the legend footprint
const LEGEND_MARGIN: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridEdge {
    Top,
    Left,
    Right,
    Bottom,
}

/// Edges in the order insets are computed
pub const GRID_EDGES: [GridEdge; 4] = [GridEdge::Top, GridEdge::Left, GridEdge::Right, GridEdge::Bottom];

impl GridEdge {
    /// Margin reserved for axis chrome regardless of the legend
    pub fn base_inset(&self) -> f64 {
        match self {
            GridEdge::Top => 24.0,
            GridEdge::Left => 64.0,
            GridEdge::Right => 24.0,
            GridEdge::Bottom => 50.0,
        }
    }

    fn is_horizontal_band(&self) -> bool {
        matches!(self, GridEdge::Top | GridEdge::Bottom)
    }
}

impl From<LegendPosition> for GridEdge {
    fn from(pos: LegendPosition) -> Self {
        match pos {
            LegendPosition::Top => GridEdge::Top,
            LegendPosition::Left => GridEdge::Left,
            LegendPosition::Right => GridEdge::Right,
            LegendPosition::Bottom => GridEdge::Bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridInsets {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl GridInsets {
    pub fn get(&self, edge: GridEdge) -> f64 {
        match edge {
            GridEdge::Top => self.top,
            GridEdge::Left => self.left,
            GridEdge::Right => self.right,
            GridEdge::Bottom => self.bottom,
        }
    }

    fn set(&mut self, edge: GridEdge, value: f64) {
        match edge {
            GridEdge::Top => self.top = value,
            GridEdge::Left => self.left = value,
            GridEdge::Right => self.right = value,
            GridEdge::Bottom => self.bottom = value,
        }
    }
}

/// Widest series name at the legend font. Zero when there are no series.
fn widest_name(cfg: &LegendStyleConfig, series_names: &[String], measurer: &dyn TextMeasurer) -> f64 {
    let size_spec = format!("{}px", cfg.font_size);
    series_names
        .iter()
        .map(|name| measurer.measure_text_width(name, "", &size_spec))
        .fold(0.0, f64::max)
}

fn legend_extent(edge: GridEdge, cfg: &LegendStyleConfig, series_names: &[String], measurer: &dyn TextMeasurer) -> f64 {
    if edge.is_horizontal_band() {
        LEGEND_BAR_HEIGHT as f64
    } else {
        LEGEND_MARGIN + widest_name(cfg, series_names, measurer)
    }
}

pub fn compute_grid_insets(
    cfg: &LegendStyleConfig,
    series_names: &[String],
    measurer: &dyn TextMeasurer,
) -> GridInsets {
    let legend_edge = GridEdge::from(cfg.legend_position);
    let mut insets = GridInsets {
        top: 0.0,
        left: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    for edge in GRID_EDGES {
        let mut value = edge.base_inset();
        if cfg.show_legend && edge == legend_edge {
            value += legend_extent(edge, cfg, series_names, measurer);
        }
        insets.set(edge, value);
    }

    debug!(
        "Grid insets for {} legend over {} series: {:?}",
        cfg.legend_position.as_str(),
        series_names.len(),
        insets
    );
    insets
}
