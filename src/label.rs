use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use crate::config::{ChartKind, LabelStyleConfig, PieLabelPosition};

/// One label state (normal or emphasis) plus caller-supplied extra fields.
///
/// Extra fields win over the base fields when the block is merged.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBlock {
    pub show: bool,
    pub position: String,
    pub color: String,
    pub font_family: String,
    pub font_size: String,
    pub extra: Map<String, Value>,
}

impl LabelBlock {
    fn base_fields(&self) -> [(&'static str, Value); 5] {
        [
            ("show", Value::Bool(self.show)),
            ("position", Value::String(self.position.clone())),
            ("color", Value::String(self.color.clone())),
            ("fontFamily", Value::String(self.font_family.clone())),
            ("fontSize", Value::String(self.font_size.clone())),
        ]
    }

    /// Base fields overlaid with the extra fields
    pub fn merged(&self) -> Map<String, Value> {
        let mut out: Map<String, Value> = self
            .base_fields()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        for (k, v) in &self.extra {
            out.insert(k.clone(), v.clone());
        }
        out
    }

    /// Effective value of a field after the merge
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(v) = self.extra.get(key) {
            return Some(v.clone());
        }
        self.base_fields()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

impl Serialize for LabelBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let merged = self.merged();
        let mut map = serializer.serialize_map(Some(merged.len()))?;
        for (k, v) in &merged {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelDescriptor {
    pub normal: LabelBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<LabelBlock>,
}

fn label_position(kind: ChartKind, cfg: &LabelStyleConfig) -> String {
    match kind {
        ChartKind::Pie => cfg.pie_label_position.as_str().to_string(),
        ChartKind::Funnel => cfg.funnel_label_position.clone(),
        ChartKind::Line
        | ChartKind::Bar
        | ChartKind::Scatter
        | ChartKind::Radar
        | ChartKind::Sankey
        | ChartKind::Parallel
        | ChartKind::WordCloud
        | ChartKind::Waterfall
        | ChartKind::DoubleYAxis => cfg.label_position.clone(),
    }
}

/// Series label option for `kind`.
///
/// Pie labels placed at the center are hidden in the normal state so they do
/// not cover a center annotation; the emphasis state always follows `showLabel`.
pub fn build_label(
    kind: ChartKind,
    cfg: &LabelStyleConfig,
    include_emphasis: bool,
    extra: Option<&Map<String, Value>>,
) -> LabelDescriptor {
    let position = label_position(kind, cfg);
    let extra = extra.cloned().unwrap_or_default();
    let centered_pie = kind == ChartKind::Pie && cfg.pie_label_position == PieLabelPosition::Center;

    let block = |show: bool| LabelBlock {
        show,
        position: position.clone(),
        color: cfg.label_color.clone(),
        font_family: cfg.label_font_family.clone(),
        font_size: cfg.label_font_size.clone(),
        extra: extra.clone(),
    };

    LabelDescriptor {
        normal: block(if centered_pie { false } else { cfg.show_label }),
        emphasis: include_emphasis.then(|| block(cfg.show_label)),
    }
}
