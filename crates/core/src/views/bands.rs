//! Band view: projects laid-out lanes through the current time projection
//! and emits rectangles, band labels, and lane titles.
//!
//! Geometry is read-only here — pan/zoom only changes what this emits, never
//! the bands themselves.

use lanechart_protocol::{Point, Rect, RenderCommand, TextAlign, Viewport, palette};

use crate::color::ChartStyle;
use crate::model::Lane;
use crate::projection::TimeProjection;

const LABEL_FONT_SIZE: f64 = 12.0;
const TITLE_FONT_SIZE: f64 = 14.0;
const TITLE_X: f64 = 20.0;
const TITLE_Y: f64 = 18.0;
/// Left gutter a label gets pinned to when its band starts off-screen.
const LEFT_GUTTER: f64 = 175.0;
/// Estimated text advance per character; real measurement belongs to the
/// renderer, this only gates label emission.
const CHAR_WIDTH: f64 = 7.0;

/// Render all lanes as band rectangles + labels + lane titles.
pub fn render_lanes(
    lanes: &[Lane],
    style: &ChartStyle,
    projection: &TimeProjection,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(lanes.iter().map(|l| l.bands.len() * 2 + 3).sum());

    for (lane_index, lane) in lanes.iter().enumerate() {
        let lane_top = lane.vertical_offset - viewport.y;
        if lane_top + lane.total_height < 0.0 || lane_top > viewport.height {
            continue;
        }

        commands.push(RenderCommand::BeginGroup {
            id: lane.name.clone(),
            label: Some(lane.name.clone()),
        });

        let text_color = style.text_color(&lane.name);
        for (band_index, band) in lane.bands.iter().enumerate() {
            let x0 = projection.project(band.start);
            let x1 = projection.project(band.end);
            let width = x1 - x0;

            // Off-screen and sub-pixel bands are skipped, not drawn.
            if x1 < 0.0 || x0 > viewport.width || width < 0.5 {
                continue;
            }
            let y = lane_top + band.y_offset;
            if y + band.height < 0.0 || y > viewport.height {
                continue;
            }

            commands.push(RenderCommand::DrawRect {
                rect: Rect::new(x0, y, width, band.height),
                fill: style.band_color(&lane.name, lane_index, band),
                border: Some(palette::BLACK),
                label: Some(band.label().to_string()),
                band_id: Some(band_id(lane_index, band_index)),
            });

            let label = band.label();
            let estimated = label.chars().count() as f64 * CHAR_WIDTH;
            if width <= estimated {
                continue;
            }
            // A band running off the left edge keeps its label readable:
            // pinned at the gutter when there is room, otherwise
            // left-anchored at the midpoint.
            let (label_x, align) = if x0 < 0.0 {
                if x1 > LEFT_GUTTER + estimated {
                    (LEFT_GUTTER, TextAlign::Left)
                } else {
                    ((x0 + x1) / 2.0, TextAlign::Left)
                }
            } else {
                ((x0 + x1) / 2.0, TextAlign::Center)
            };
            commands.push(RenderCommand::DrawText {
                position: Point::new(label_x, y + band.height * 0.75),
                text: label.to_string(),
                color: text_color,
                font_size: LABEL_FONT_SIZE,
                align,
            });
        }

        commands.push(RenderCommand::DrawText {
            position: Point::new(TITLE_X, lane_top + TITLE_Y),
            text: lane.name.clone(),
            color: palette::BLACK,
            font_size: TITLE_FONT_SIZE,
            align: TextAlign::Left,
        });

        commands.push(RenderCommand::EndGroup);
    }

    commands
}

/// Stable hit-testing id: lane index in the high bits, band index low.
fn band_id(lane_index: usize, band_index: usize) -> u64 {
    ((lane_index as u64) << 32) | band_index as u64
}
