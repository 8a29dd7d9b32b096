//! Time axis strip: a bar along the bottom of the viewport with ticks at
//! "nice" calendar intervals and labels whose precision follows the tick
//! spacing.

use lanechart_protocol::{Color, Point, Rect, RenderCommand, TextAlign, Viewport, palette};

use crate::projection::TimeProjection;
use crate::timefmt::{
    MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_MONTH, MS_PER_SECOND, MS_PER_YEAR, axis_label,
};

pub const AXIS_HEIGHT: f64 = 50.0;
const MAJOR_TICK_HEIGHT: f64 = 10.0;
const MEDIUM_TICK_HEIGHT: f64 = 6.0;
const FONT_SIZE: f64 = 10.0;
/// Target pixel spacing between major ticks.
const MIN_MAJOR_SPACING_PX: f64 = 80.0;

const AXIS_BACKGROUND: Color = Color::rgba(0xff, 0xff, 0xff, 0xcc);

/// Render the axis strip over the bottom `AXIS_HEIGHT` pixels of the
/// viewport, with vertical gridlines extending `grid_height` pixels up into
/// the lanes (0 disables them).
pub fn render_time_axis(
    projection: &TimeProjection,
    viewport: &Viewport,
    grid_height: f64,
) -> Vec<RenderCommand> {
    let (view_start, view_end) = projection.domain();
    let span = projection.span();
    if span <= 0.0 {
        return Vec::new();
    }

    let width = viewport.width;
    let top = viewport.height - AXIS_HEIGHT;
    let mut commands = Vec::with_capacity(64);

    // Translucent strip so bands scrolling under the axis stay hinted.
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, top, width, AXIS_HEIGHT),
        fill: AXIS_BACKGROUND,
        border: None,
        label: None,
        band_id: None,
    });

    let (major_interval, subdivisions) = nice_interval(span, width);
    let medium_interval = major_interval / f64::from(subdivisions);

    // Ticks align to fixed multiples of the interval since the epoch, not to
    // calendar boundaries.
    let first_major = (view_start / major_interval).floor() * major_interval;

    let first_medium = (view_start / medium_interval).floor() * medium_interval;
    let mut t = first_medium;
    while t <= view_end {
        let x = projection.project(t);
        if (0.0..=width).contains(&x) && !is_aligned(t, major_interval, first_major) {
            commands.push(RenderCommand::DrawLine {
                from: Point::new(x, top),
                to: Point::new(x, top + MEDIUM_TICK_HEIGHT),
                color: palette::LANE_GRAY_DARK,
                width: 0.5,
            });
        }
        t += medium_interval;
    }

    t = first_major;
    while t <= view_end {
        let x = projection.project(t);
        if (0.0..=width).contains(&x) {
            commands.push(RenderCommand::DrawLine {
                from: Point::new(x, top),
                to: Point::new(x, top + MAJOR_TICK_HEIGHT),
                color: palette::BLACK,
                width: 1.0,
            });
            commands.push(RenderCommand::DrawText {
                position: Point::new(x + 3.0, top + MAJOR_TICK_HEIGHT + 12.0),
                text: axis_label(t, major_interval),
                color: palette::BLACK,
                font_size: FONT_SIZE,
                align: TextAlign::Left,
            });
            if grid_height > 0.0 {
                commands.push(RenderCommand::DrawLine {
                    from: Point::new(x, top - grid_height),
                    to: Point::new(x, top),
                    color: palette::LANE_GRAY_LIGHT,
                    width: 0.5,
                });
            }
        }
        t += major_interval;
    }

    commands
}

/// Check if time `t` is approximately aligned with `interval` from `base`.
fn is_aligned(t: f64, interval: f64, base: f64) -> bool {
    let offset = (t - base) / interval;
    (offset - offset.round()).abs() < 0.001
}

/// Choose a "nice" major tick interval in calendar ms for the visible span
/// and pixel width. Returns (major_interval_ms, subdivisions).
fn nice_interval(span_ms: f64, width_px: f64) -> (f64, u32) {
    let target_count = (width_px / MIN_MAJOR_SPACING_PX).max(2.0);
    let raw_interval = span_ms / target_count;

    let nice_values: &[(f64, u32)] = &[
        (MS_PER_SECOND, 2),
        (5.0 * MS_PER_SECOND, 5),
        (15.0 * MS_PER_SECOND, 3),
        (30.0 * MS_PER_SECOND, 2),
        (MS_PER_MINUTE, 2),
        (5.0 * MS_PER_MINUTE, 5),
        (15.0 * MS_PER_MINUTE, 3),
        (30.0 * MS_PER_MINUTE, 2),
        (MS_PER_HOUR, 2),
        (3.0 * MS_PER_HOUR, 3),
        (6.0 * MS_PER_HOUR, 2),
        (12.0 * MS_PER_HOUR, 2),
        (MS_PER_DAY, 2),
        (7.0 * MS_PER_DAY, 7),
        (MS_PER_MONTH, 2),
        (3.0 * MS_PER_MONTH, 3),
        (6.0 * MS_PER_MONTH, 2),
        (MS_PER_YEAR, 2),
        (5.0 * MS_PER_YEAR, 5),
        (10.0 * MS_PER_YEAR, 2),
        (25.0 * MS_PER_YEAR, 5),
        (50.0 * MS_PER_YEAR, 2),
        (100.0 * MS_PER_YEAR, 2),
    ];

    for &(interval, subs) in nice_values {
        if interval >= raw_interval {
            return (interval, subs);
        }
    }

    // Fallback for spans past a few centuries.
    let magnitude = 10.0_f64.powf((raw_interval / MS_PER_YEAR).log10().ceil());
    (magnitude * MS_PER_YEAR, 2)
}
