use serde::Serialize;
use std::collections::BTreeMap;
use crate::config::{LegendPosition, LegendStyleConfig};

/// Legend bar thickness for horizontal legends
pub const LEGEND_BAR_HEIGHT: u32 = 32;
/// Column width for vertical legends
pub const LEGEND_COLUMN_WIDTH: u32 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendOrient {
    Horizontal,
    Vertical,
}

/// Legend box placement; unset edges are omitted from the option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LegendInset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendTextStyle {
    pub font_family: String,
    pub font_size: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendDescriptor {
    pub show: bool,
    pub data: Vec<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text_style: LegendTextStyle,
    pub orient: LegendOrient,
    #[serde(flatten)]
    pub inset: LegendInset,
    pub selected: BTreeMap<String, bool>,
}

fn placement(position: LegendPosition) -> (LegendOrient, LegendInset) {
    match position {
        LegendPosition::Top => (
            LegendOrient::Horizontal,
            LegendInset {
                top: Some(8),
                left: Some(8),
                right: Some(8),
                height: Some(LEGEND_BAR_HEIGHT),
                ..Default::default()
            },
        ),
        LegendPosition::Bottom => (
            LegendOrient::Horizontal,
            LegendInset {
                bottom: Some(8),
                left: Some(8),
                right: Some(8),
                height: Some(LEGEND_BAR_HEIGHT),
                ..Default::default()
            },
        ),
        LegendPosition::Left => (
            LegendOrient::Vertical,
            LegendInset {
                left: Some(8),
                top: Some(16),
                bottom: Some(24),
                width: Some(LEGEND_COLUMN_WIDTH),
                ..Default::default()
            },
        ),
        LegendPosition::Right => (
            LegendOrient::Vertical,
            LegendInset {
                right: Some(8),
                top: Some(16),
                bottom: Some(24),
                width: Some(LEGEND_COLUMN_WIDTH),
                ..Default::default()
            },
        ),
    }
}

/// Scrollable legend listing `series_names` in order, all initially
/// checked or unchecked per `selectAll`
pub fn build_legend(cfg: &LegendStyleConfig, series_names: &[String]) -> LegendDescriptor {
    let (orient, inset) = placement(cfg.legend_position);
    let selected = series_names
        .iter()
        .map(|name| (name.clone(), cfg.select_all))
        .collect();

    LegendDescriptor {
        show: cfg.show_legend,
        data: series_names.to_vec(),
        kind: "scroll",
        text_style: LegendTextStyle {
            font_family: cfg.font_family.clone(),
            font_size: cfg.font_size.clone(),
            color: cfg.color.clone(),
        },
        orient,
        inset,
        selected,
    }
}
