use serde::{Deserialize, Serialize};

use crate::types::{Color, Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per frame. Renderers consume the
/// list sequentially — each command carries all the data it needs, so a
/// renderer holds no chart state beyond the list it was last given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle (a band, an axis strip, …), optionally with
    /// a tooltip label and a logical band identifier for hit-testing.
    DrawRect {
        rect: Rect,
        fill: Color,
        border: Option<Color>,
        label: Option<String>,
        band_id: Option<u64>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: String,
        color: Color,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },

    /// Begin a logical group (one per lane). Renderers may use this for
    /// batching, layer separation, or accessibility.
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}
