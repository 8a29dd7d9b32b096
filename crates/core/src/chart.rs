//! Chart orchestrator: owns the laid-out lanes, the time projection, and
//! the style table, and assembles the per-frame command list.
//!
//! Layout runs once per dataset load; pan/zoom only mutate the projection.
//! A second load fully replaces the first — lanes are recomputed wholesale
//! and the projection snaps to the new full extent.

use lanechart_protocol::{RenderCommand, Viewport};
use thiserror::Error;
use tracing::info;

use crate::color::ChartStyle;
use crate::dataset::Dataset;
use crate::layout::{LayoutConfig, layout};
use crate::model::Lane;
use crate::projection::{ProjectionError, TimeProjection};
use crate::timefmt::MS_PER_DAY;
use crate::views::{axis, bands, cursor};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("dataset contains no dated events")]
    EmptyDataset,
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

pub struct Chart {
    lanes: Vec<Lane>,
    projection: TimeProjection,
    style: ChartStyle,
    config: LayoutConfig,
}

impl Chart {
    /// Lay out a dataset and open the view on its full extent.
    pub fn new(
        dataset: &Dataset,
        style: ChartStyle,
        config: LayoutConfig,
        pixel_width: f64,
    ) -> Result<Self, ChartError> {
        let (start, end) = extent(dataset)?;
        let lanes = layout(&dataset.lanes, &config);
        info!(lanes = lanes.len(), "chart laid out");
        Ok(Self {
            lanes,
            projection: TimeProjection::new(start, end, pixel_width)?,
            style,
            config,
        })
    }

    /// Replace the current layout with a freshly loaded dataset.
    pub fn load(&mut self, dataset: &Dataset) -> Result<(), ChartError> {
        let (start, end) = extent(dataset)?;
        self.lanes = layout(&dataset.lanes, &self.config);
        self.projection = TimeProjection::new(start, end, self.projection.width())?;
        Ok(())
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn projection(&self) -> &TimeProjection {
        &self.projection
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Total stacked height of all lanes.
    pub fn total_height(&self) -> f64 {
        self.lanes.last().map_or(0.0, Lane::bottom)
    }

    // Navigation passes through to the projection; the chart is the single
    // owner the input loop mutates.

    pub fn pan(&mut self, delta_pixels: f64) {
        self.projection.apply_pan(delta_pixels);
    }

    pub fn zoom(&mut self, factor: f64, focal_pixel: f64) {
        self.projection.apply_zoom(factor, focal_pixel);
    }

    pub fn reset_view(&mut self) {
        self.projection.reset();
    }

    pub fn resize(&mut self, pixel_width: f64) -> Result<(), ProjectionError> {
        self.projection.set_width(pixel_width)
    }

    /// The formatted instant under a pixel.
    pub fn readout(&self, pixel_x: f64) -> String {
        cursor::readout_label(&self.projection, pixel_x)
    }

    /// Assemble the full frame: bands, axis strip, and (when a pointer is
    /// present) the time cursor.
    pub fn render(&self, viewport: &Viewport, cursor_px: Option<f64>) -> Vec<RenderCommand> {
        let mut commands = bands::render_lanes(&self.lanes, &self.style, &self.projection, viewport);
        commands.extend(axis::render_time_axis(
            &self.projection,
            viewport,
            viewport.height - axis::AXIS_HEIGHT,
        ));
        if let Some(px) = cursor_px {
            commands.extend(cursor::render_cursor(&self.projection, viewport, px));
        }
        commands
    }
}

fn extent(dataset: &Dataset) -> Result<(f64, f64), ChartError> {
    let (start, end) = dataset.extent().ok_or(ChartError::EmptyDataset)?;
    // A dataset of zero-duration events still needs a non-degenerate window.
    if start < end {
        Ok((start, end))
    } else {
        Ok((start - MS_PER_DAY, end + MS_PER_DAY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Event;

    fn dataset() -> Dataset {
        Dataset::from_lanes(vec![
            (
                "Jobs".to_string(),
                vec![
                    Event::new("Amazon", 0.0, 500.0),
                    Event::new("Google", 400.0, 900.0),
                ],
            ),
            ("Pets".to_string(), vec![Event::new("Cat", 100.0, 1_000.0)]),
        ])
    }

    fn viewport() -> Viewport {
        Viewport {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
            dpr: 1.0,
        }
    }

    #[test]
    fn opens_on_full_extent() {
        let chart = Chart::new(&dataset(), ChartStyle::new(), LayoutConfig::default(), 800.0)
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(chart.projection().domain(), (0.0, 1_000.0));
        assert_eq!(chart.lanes().len(), 2);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let empty = Dataset::default();
        assert!(matches!(
            Chart::new(&empty, ChartStyle::new(), LayoutConfig::default(), 800.0),
            Err(ChartError::EmptyDataset)
        ));
    }

    #[test]
    fn navigation_does_not_touch_band_geometry() {
        let mut chart = Chart::new(&dataset(), ChartStyle::new(), LayoutConfig::default(), 800.0)
            .unwrap_or_else(|e| unreachable!("{e}"));
        let before = chart.lanes().to_vec();
        chart.zoom(4.0, 200.0);
        chart.pan(120.0);
        assert_eq!(chart.lanes(), &before[..]);
        chart.reset_view();
        assert_eq!(chart.projection().domain(), (0.0, 1_000.0));
    }

    #[test]
    fn load_replaces_wholesale() {
        let mut chart = Chart::new(&dataset(), ChartStyle::new(), LayoutConfig::default(), 800.0)
            .unwrap_or_else(|e| unreachable!("{e}"));
        chart.zoom(10.0, 300.0);
        let replacement = Dataset::from_lanes(vec![(
            "Trips".to_string(),
            vec![Event::new("Japan", 2_000.0, 3_000.0)],
        )]);
        chart.load(&replacement).unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(chart.lanes().len(), 1);
        assert_eq!(chart.lanes()[0].name, "Trips");
        assert_eq!(chart.projection().domain(), (2_000.0, 3_000.0));
    }

    #[test]
    fn render_includes_axis_and_optional_cursor() {
        let chart = Chart::new(&dataset(), ChartStyle::new(), LayoutConfig::default(), 800.0)
            .unwrap_or_else(|e| unreachable!("{e}"));
        let without = chart.render(&viewport(), None);
        let with = chart.render(&viewport(), Some(240.0));
        assert!(with.len() > without.len());
        assert!(without
            .iter()
            .any(|c| matches!(c, RenderCommand::BeginGroup { id, .. } if id == "Jobs")));
    }

    #[test]
    fn zero_duration_dataset_gets_padded_window() {
        let flat = Dataset::from_lanes(vec![(
            "Moments".to_string(),
            vec![Event::new("now", 500.0, 500.0)],
        )]);
        let chart = Chart::new(&flat, ChartStyle::new(), LayoutConfig::default(), 800.0)
            .unwrap_or_else(|e| unreachable!("{e}"));
        let (start, end) = chart.projection().domain();
        assert!(start < end);
    }

    #[test]
    fn total_height_tracks_last_lane() {
        let chart = Chart::new(&dataset(), ChartStyle::new(), LayoutConfig::default(), 800.0)
            .unwrap_or_else(|e| unreachable!("{e}"));
        // Jobs: 2 rows (54) + 2 gap, Pets: 1 row (27).
        assert!((chart.total_height() - 83.0).abs() < f64::EPSILON);
    }
}
