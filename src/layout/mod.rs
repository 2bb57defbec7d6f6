//! Waveform layout engine.
//!
//! [`Geometry`] is the bridge between domain parameters and pixels: a pure
//! function of (calibration, viewport, sample count) that every renderer
//! query reads from. It is computed once per parameter change and shared
//! read-only for the duration of a frame; a calibration change produces a
//! new value rather than mutating the old one, so a renderer mid-frame
//! never observes a half-updated geometry.
//!
//! The per-sample transform lives in [`trace`], grid line enumeration in
//! [`grid`], and the 1 mV calibration ruler in [`ruler`]. Separating the
//! constant-size parameter-driven geometry from the O(1)-per-point sample
//! mapping lets a renderer redraw only the visible horizontal slice on
//! every scroll frame, even with tens of thousands of samples.

pub mod grid;
pub mod ruler;
pub mod trace;

use crate::model::{CalibrationError, CalibrationParams, Viewport};
use ruler::{RULER_TOTAL_WIDTH_PX, STROKE_HALF_WIDTH_PX};

/// A point in strip pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

impl PixelPoint {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction of the positive y axis in the target pixel space.
///
/// The trace and ruler scale amplitudes by a signed ruler height; both pick
/// up the orientation from that single field, so flipping here inverts them
/// consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisOrientation {
    /// y grows downward (canvas convention). A positive millivolt
    /// deflection maps to a negative y offset.
    #[default]
    YDown,
    /// y grows upward (mathematical convention).
    YUp,
}

/// Pixel geometry derived from calibration, viewport, and sample count.
///
/// A pure value: recomputing with identical inputs yields a bit-identical
/// result. The coordinate-space fields [`baseline_y_px`](Self::baseline_y_px)
/// and [`trace_origin_x_px`](Self::trace_origin_x_px) are explicit so a
/// renderer applies them as translations instead of relying on an implicit
/// origin convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Spacing between adjacent minor grid lines; represents 1 mm of
    /// paper. `viewport.height / grid_divisions_per_height`.
    pub grid_pitch_px: f64,

    /// Horizontal distance between consecutive samples.
    /// `paper_speed * grid_pitch_px / sampling_rate_hz`.
    pub sample_pitch_px: f64,

    /// Total virtual canvas width: the trace plus the ruler block.
    pub content_width_px: f64,

    /// Signed height of a 1 mV deflection, stroke-compensated. Negative
    /// under [`AxisOrientation::YDown`].
    pub ruler_height_px: f64,

    /// Upper bound of the valid scroll range:
    /// `max(0, content_width_px - viewport.width)`.
    pub max_scroll_px: f64,

    /// Vertical position of the trace baseline: half the viewport height.
    pub baseline_y_px: f64,

    /// Horizontal position where the trace begins, past the ruler block.
    pub trace_origin_x_px: f64,

    /// The viewport this geometry was computed for.
    pub viewport: Viewport,

    /// Number of samples in the lead data sequence.
    pub sample_count: u32,

    /// Gain divisor carried over from calibration for the sample transform.
    pub gain_divisor: f64,
}

impl Geometry {
    /// Compute geometry with the default downward-positive y axis.
    ///
    /// Pure: no side effects, and deterministic for identical inputs.
    /// Fails with [`CalibrationError`] when a scale field is zero or
    /// negative or the viewport is degenerate; the caller keeps its
    /// previous geometry in that case.
    pub fn compute(
        calibration: &CalibrationParams,
        viewport: Viewport,
        sample_count: u32,
    ) -> Result<Self, CalibrationError> {
        Self::compute_oriented(calibration, viewport, sample_count, AxisOrientation::YDown)
    }

    /// Compute geometry for an explicit y-axis orientation.
    pub fn compute_oriented(
        calibration: &CalibrationParams,
        viewport: Viewport,
        sample_count: u32,
        orientation: AxisOrientation,
    ) -> Result<Self, CalibrationError> {
        calibration.validate()?;
        viewport.validate()?;

        let grid_pitch_px = viewport.height / f64::from(calibration.grid_divisions_per_height);
        let sample_pitch_px = calibration.paper_speed.mm_per_sec() * grid_pitch_px
            / f64::from(calibration.sampling_rate_hz);
        let content_width_px = sample_pitch_px * f64::from(sample_count) + RULER_TOTAL_WIDTH_PX;

        // Stroke compensation keeps the ruler top edge inside the 1 mV
        // span; the sign encodes the axis direction.
        let magnitude = grid_pitch_px * calibration.mm_per_mv.millimetres() - STROKE_HALF_WIDTH_PX;
        let ruler_height_px = match orientation {
            AxisOrientation::YDown => -magnitude,
            AxisOrientation::YUp => magnitude,
        };

        let geometry = Self {
            grid_pitch_px,
            sample_pitch_px,
            content_width_px,
            ruler_height_px,
            max_scroll_px: (content_width_px - viewport.width).max(0.0),
            baseline_y_px: viewport.height / 2.0,
            trace_origin_x_px: RULER_TOTAL_WIDTH_PX,
            viewport,
            sample_count,
            gain_divisor: calibration.gain_divisor,
        };
        tracing::debug!(
            grid_pitch_px,
            sample_pitch_px,
            content_width_px,
            max_scroll_px = geometry.max_scroll_px,
            "geometry recomputed"
        );
        Ok(geometry)
    }
}
