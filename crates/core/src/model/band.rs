use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The laid-out form of an [`Event`](super::Event): a horizontal band at an
/// assigned row within its lane.
///
/// Created by the interval packer and never mutated afterwards — pan/zoom
/// only changes projected pixel coordinates, which are derived from the
/// immutable `start`/`end` on every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub name: String,
    pub short_name: Option<String>,
    /// Start instant (ms since epoch), carried through for projection.
    pub start: f64,
    /// End instant (ms since epoch), carried through for projection.
    pub end: f64,
    /// Classification fields carried through for color resolution.
    pub tags: BTreeMap<String, String>,
    /// Vertical slot within the lane. Two bands sharing a row never overlap
    /// in time.
    pub row: u32,
    /// Pixels from the lane top.
    pub y_offset: f64,
    /// Band height in pixels.
    pub height: f64,
}

impl Band {
    /// The label to draw: the short name when present, else the full name.
    pub fn label(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }

    /// Look up a classification attribute (`"name"` maps to the display name).
    pub fn attribute(&self, key: &str) -> Option<&str> {
        if key == "name" {
            Some(&self.name)
        } else {
            self.tags.get(key).map(String::as_str)
        }
    }

    /// Half-open interval overlap test; touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Band) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A named vertical region of the chart containing one category's bands.
///
/// Lanes are stacked top to bottom in caller-specified order with no
/// vertical overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub name: String,
    /// Bands sorted by start time.
    pub bands: Vec<Band>,
    /// Top of the lane in overall chart coordinates.
    pub vertical_offset: f64,
    /// Vertical extent of this lane.
    pub total_height: f64,
    /// Number of rows the packer used.
    pub rows: u32,
}

impl Lane {
    /// Bottom edge of the lane in overall chart coordinates.
    pub fn bottom(&self) -> f64 {
        self.vertical_offset + self.total_height
    }
}
