//! Time projection: the invertible mapping between calendar time and
//! horizontal pixel position.
//!
//! One `TimeProjection` value is owned by the input-handling loop and
//! mutated in place by pan/zoom gestures; renderers and the cursor readout
//! only read it. Band geometry is never recomputed on navigation — pixel
//! coordinates are re-derived from immutable band times each frame.

use thiserror::Error;

/// Zoom bounds relative to the full extent. 1.0 means the whole dataset is
/// visible; zooming out stops there.
pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 500.0;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("invalid time range: start {start} must be before end {end}")]
    InvalidRange { start: f64, end: f64 },
    #[error("invalid pixel width: {width}")]
    InvalidWidth { width: f64 },
}

/// Monotonic, invertible time→pixel mapping over a visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeProjection {
    domain_start: f64,
    domain_end: f64,
    full_start: f64,
    full_end: f64,
    width: f64,
}

impl TimeProjection {
    /// Create a projection showing the full extent `[start, end)` across
    /// `width` pixels.
    pub fn new(start: f64, end: f64, width: f64) -> Result<Self, ProjectionError> {
        check_domain(start, end)?;
        check_width(width)?;
        Ok(Self {
            domain_start: start,
            domain_end: end,
            full_start: start,
            full_end: end,
            width,
        })
    }

    /// Map an instant (ms since epoch) to a pixel x coordinate. O(1).
    pub fn project(&self, time_ms: f64) -> f64 {
        (time_ms - self.domain_start) / self.span() * self.width
    }

    /// Map a pixel x coordinate back to an instant. O(1).
    pub fn unproject(&self, pixel: f64) -> f64 {
        self.domain_start + pixel / self.width * self.span()
    }

    /// Replace the visible window. Fails fast on an empty or inverted range;
    /// callers clamp gestures before applying them.
    pub fn set_domain(&mut self, start: f64, end: f64) -> Result<(), ProjectionError> {
        check_domain(start, end)?;
        self.domain_start = start;
        self.domain_end = end;
        Ok(())
    }

    /// Change the pixel range on resize; the visible window is unchanged.
    pub fn set_width(&mut self, width: f64) -> Result<(), ProjectionError> {
        check_width(width)?;
        self.width = width;
        Ok(())
    }

    /// Focal-point zoom: rescale the window around `focal_pixel` so the
    /// instant under that pixel stays put.
    ///
    /// `factor` multiplies the current scale (> 1 zooms in). The resulting
    /// scale is clamped to [`MIN_SCALE`], [`MAX_SCALE`], so zoom is advisory
    /// and never produces a degenerate window.
    pub fn apply_zoom(&mut self, factor: f64, focal_pixel: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let target = (self.scale() * factor).clamp(MIN_SCALE, MAX_SCALE);
        let new_span = self.full_span() / target;

        let focal_time = self.unproject(focal_pixel);
        let start = focal_time - focal_pixel / self.width * new_span;
        self.domain_start = start;
        self.domain_end = start + new_span;
    }

    /// Pan by a horizontal pixel delta: dragging the content right
    /// (positive `delta_pixels`) moves the window earlier in time. Only the
    /// horizontal component of a gesture ever reaches this — vertical drag
    /// is discarded by the input layer so lanes never shift during a pan.
    pub fn apply_pan(&mut self, delta_pixels: f64) {
        let dt = delta_pixels / self.width * self.span();
        self.domain_start -= dt;
        self.domain_end -= dt;
    }

    /// Restore the original full-extent window.
    pub fn reset(&mut self) {
        self.domain_start = self.full_start;
        self.domain_end = self.full_end;
    }

    /// The visible window `(start, end)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// The full extent the projection was created with.
    pub fn full_extent(&self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    /// Width of the visible window in ms.
    pub fn span(&self) -> f64 {
        self.domain_end - self.domain_start
    }

    /// Pixel width of the range.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current zoom scale: full extent span over visible span.
    pub fn scale(&self) -> f64 {
        self.full_span() / self.span()
    }

    fn full_span(&self) -> f64 {
        self.full_end - self.full_start
    }
}

fn check_domain(start: f64, end: f64) -> Result<(), ProjectionError> {
    if !(start.is_finite() && end.is_finite() && start < end) {
        return Err(ProjectionError::InvalidRange { start, end });
    }
    Ok(())
}

fn check_width(width: f64) -> Result<(), ProjectionError> {
    if !(width.is_finite() && width > 0.0) {
        return Err(ProjectionError::InvalidWidth { width });
    }
    Ok(())
}
