//! Time cursor: a vertical line tracking the pointer plus a readout label
//! whose precision follows the visible span.

use lanechart_protocol::{Point, RenderCommand, TextAlign, Viewport, palette};

use crate::projection::TimeProjection;
use crate::timefmt::{format_instant, precision_for_span};

const FONT_SIZE: f64 = 14.0;
const LABEL_OFFSET_X: f64 = 10.0;
const LABEL_OFFSET_BOTTOM: f64 = 30.0;

/// The formatted instant under a pixel, at span-appropriate precision.
pub fn readout_label(projection: &TimeProjection, pixel_x: f64) -> String {
    let time = projection.unproject(pixel_x);
    format_instant(time, precision_for_span(projection.span()))
}

/// Render the cursor line and its readout label.
pub fn render_cursor(
    projection: &TimeProjection,
    viewport: &Viewport,
    pixel_x: f64,
) -> Vec<RenderCommand> {
    vec![
        RenderCommand::DrawLine {
            from: Point::new(pixel_x, 0.0),
            to: Point::new(pixel_x, viewport.height),
            color: palette::BLACK,
            width: 1.0,
        },
        RenderCommand::DrawText {
            position: Point::new(
                pixel_x + LABEL_OFFSET_X,
                viewport.height - LABEL_OFFSET_BOTTOM,
            ),
            text: readout_label(projection, pixel_x),
            color: palette::BLACK,
            font_size: FONT_SIZE,
            align: TextAlign::Left,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timefmt::{MS_PER_DAY, date_ms};

    fn projection(days: f64) -> TimeProjection {
        let start = date_ms(2001, 6, 1).unwrap_or_default();
        TimeProjection::new(start, start + days * MS_PER_DAY, 800.0)
            .unwrap_or_else(|e| unreachable!("{e}"))
    }

    #[test]
    fn wide_span_reads_month_year() {
        // 800 days visible; pixel 0 sits at the domain start.
        assert_eq!(readout_label(&projection(800.0), 0.0), "June 2001");
    }

    #[test]
    fn medium_span_reads_month_day_year() {
        assert_eq!(readout_label(&projection(60.0), 0.0), "June 1st 2001");
    }

    #[test]
    fn tight_span_reads_full_time() {
        // 1 day over 800 px: pixel 400 is noon.
        assert_eq!(
            readout_label(&projection(1.0), 400.0),
            "June 1st 2001, 12:00:00 pm"
        );
    }

    #[test]
    fn cursor_commands_track_the_pixel() {
        let commands = render_cursor(
            &projection(800.0),
            &Viewport {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0,
                dpr: 1.0,
            },
            250.0,
        );
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            RenderCommand::DrawLine { from, to, .. } => {
                assert!((from.x - 250.0).abs() < f64::EPSILON);
                assert!((to.x - 250.0).abs() < f64::EPSILON);
                assert!((to.y - 600.0).abs() < f64::EPSILON);
            }
            other => panic!("expected line, got {other:?}"),
        }
        match &commands[1] {
            RenderCommand::DrawText { position, .. } => {
                assert!((position.x - 260.0).abs() < f64::EPSILON);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
