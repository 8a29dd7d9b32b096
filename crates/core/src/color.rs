//! Color resolution: maps a band's classification attribute to a concrete
//! fill color.
//!
//! Each lane gets one resolver, chosen when the style is built — either an
//! ordinal scale over a classification attribute or a flat fallback color.
//! Nothing re-dispatches per datum beyond one enum match.

use std::collections::BTreeMap;

use lanechart_protocol::{Color, palette};

use crate::model::Band;

/// A d3-style ordinal scale: domain values map positionally onto the range,
/// cycling when the range is shorter.
///
/// Unlike d3, unknown values are not appended to the domain — implicit
/// domain growth makes colors depend on encounter order, which would break
/// layout/render determinism. Unknown values resolve to `None` and callers
/// fall back to the lane default.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    domain: Vec<String>,
    range: Vec<Color>,
}

impl OrdinalScale {
    pub fn new(domain: Vec<String>, range: Vec<Color>) -> Self {
        Self { domain, range }
    }

    pub fn color_for(&self, value: &str) -> Option<Color> {
        if self.range.is_empty() {
            return None;
        }
        let index = self.domain.iter().position(|d| d == value)?;
        Some(self.range[index % self.range.len()])
    }
}

/// How one lane picks its band colors.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorResolver {
    /// Look up a classification attribute in an ordinal scale.
    Scale { attribute: String, scale: OrdinalScale },
    /// Every band gets the same color.
    Fallback(Color),
}

impl ColorResolver {
    /// Resolve a band's color; `lane_default` covers scale misses.
    pub fn resolve(&self, band: &Band, lane_default: Color) -> Color {
        match self {
            Self::Scale { attribute, scale } => band
                .attribute(attribute)
                .and_then(|value| scale.color_for(value))
                .unwrap_or(lane_default),
            Self::Fallback(color) => *color,
        }
    }
}

/// Per-lane presentation: fill resolution and label text color.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneStyle {
    pub resolver: ColorResolver,
    pub text_color: Color,
}

impl LaneStyle {
    pub fn scaled(attribute: impl Into<String>, scale: OrdinalScale) -> Self {
        Self {
            resolver: ColorResolver::Scale {
                attribute: attribute.into(),
                scale,
            },
            text_color: palette::BLACK,
        }
    }

    pub fn flat(color: Color) -> Self {
        Self {
            resolver: ColorResolver::Fallback(color),
            text_color: palette::BLACK,
        }
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
}

/// The chart-wide style table, keyed by lane name. Lanes without an entry
/// alternate between two grays by lane index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartStyle {
    lanes: BTreeMap<String, LaneStyle>,
}

impl ChartStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lane(mut self, name: impl Into<String>, style: LaneStyle) -> Self {
        self.lanes.insert(name.into(), style);
        self
    }

    /// The default fill for a lane with no registered scale: light and dark
    /// gray alternating down the chart.
    pub fn default_fill(lane_index: usize) -> Color {
        if lane_index % 2 == 0 {
            palette::LANE_GRAY_LIGHT
        } else {
            palette::LANE_GRAY_DARK
        }
    }

    pub fn band_color(&self, lane_name: &str, lane_index: usize, band: &Band) -> Color {
        let fallback = Self::default_fill(lane_index);
        match self.lanes.get(lane_name) {
            Some(style) => style.resolver.resolve(band, fallback),
            None => fallback,
        }
    }

    pub fn text_color(&self, lane_name: &str) -> Color {
        self.lanes
            .get(lane_name)
            .map_or(palette::BLACK, |style| style.text_color)
    }
}
