// Text width measurement for legend layout

use plotters::style::{FontDesc, FontFamily, FontStyle};
use tracing::trace;
use crate::parser::{parse_font_size, FontUnit};

/// Average glyph advance as a fraction of the font size
const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Font size used when a size spec cannot be parsed
const FALLBACK_FONT_PX: f64 = 12.0;

/// Returns the rendered pixel width of `text`.
///
/// `font_size_spec` is a CSS-like size such as `"12px"`.
pub trait TextMeasurer {
    fn measure_text_width(&self, text: &str, font_family: &str, font_size_spec: &str) -> f64;
}

/// A parsed font size, normalised to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeSpec {
    pub px: f64,
}

impl FontSizeSpec {
    pub fn parse(spec: &str) -> Option<Self> {
        let (_, (size, unit)) = parse_font_size(spec).ok()?;
        let px = match unit {
            FontUnit::Px => size,
            FontUnit::Pt => size * 4.0 / 3.0,
        };
        Some(FontSizeSpec { px })
    }

    /// Parse, falling back to 12px for unreadable specs
    pub fn parse_or_default(spec: &str) -> Self {
        Self::parse(spec).unwrap_or_else(|| {
            trace!("Unreadable font size '{}', using {}px", spec, FALLBACK_FONT_PX);
            FontSizeSpec { px: FALLBACK_FONT_PX }
        })
    }
}

/// Width estimate from character count alone
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatingTextMeasurer;

impl EstimatingTextMeasurer {
    fn estimate(text: &str, px: f64) -> f64 {
        (text.chars().count() as f64 * px * CHAR_WIDTH_RATIO).ceil()
    }
}

impl TextMeasurer for EstimatingTextMeasurer {
    fn measure_text_width(&self, text: &str, _font_family: &str, font_size_spec: &str) -> f64 {
        Self::estimate(text, FontSizeSpec::parse_or_default(font_size_spec).px)
    }
}

/// Measures through the plotters font backend.
/// An empty family means the default sans-serif face.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersTextMeasurer;

impl TextMeasurer for PlottersTextMeasurer {
    fn measure_text_width(&self, text: &str, font_family: &str, font_size_spec: &str) -> f64 {
        let px = FontSizeSpec::parse_or_default(font_size_spec).px;
        let family = if font_family.trim().is_empty() {
            FontFamily::SansSerif
        } else {
            FontFamily::Name(font_family)
        };

        let font = FontDesc::new(family, px, FontStyle::Normal);
        match font.box_size(text) {
            Ok((width, _height)) => width as f64,
            Err(e) => {
                trace!("Font backend unavailable ({:?}), estimating width of '{}'", e, text);
                EstimatingTextMeasurer::estimate(text, px)
            }
        }
    }
}
