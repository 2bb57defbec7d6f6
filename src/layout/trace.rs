//! Sample-to-pixel mapping for the waveform trace.
//!
//! The trace is the polyline connecting consecutive [`sample
//! pixels`](Geometry::sample_pixel) in index order; no interpolation or
//! smoothing is applied. A non-finite sample fails only its own point, so
//! one corrupt value never takes down the rest of the strip.

use super::{Geometry, PixelPoint};
use crate::model::SampleError;

impl Geometry {
    /// Map one raw sample to its pixel position.
    ///
    /// `x = sample_pitch_px * index`; `y` is the sample converted to
    /// millivolts by the gain divisor, scaled by the signed ruler height.
    /// Coordinates are relative to the trace origin on the baseline
    /// ([`trace_origin_x_px`](Self::trace_origin_x_px),
    /// [`baseline_y_px`](Self::baseline_y_px) in viewport space).
    ///
    /// Linear in both arguments: doubling the index doubles x, doubling
    /// the value doubles the deviation from the baseline.
    pub fn sample_pixel(&self, index: u32, value: f32) -> Result<PixelPoint, SampleError> {
        if !value.is_finite() {
            return Err(SampleError::NonFinite { index, value });
        }
        let millivolts = f64::from(value) / self.gain_divisor;
        Ok(PixelPoint::new(
            self.sample_pitch_px * f64::from(index),
            millivolts * self.ruler_height_px,
        ))
    }

    /// Map a lead data slice to per-point results in index order.
    ///
    /// Lazy: a renderer typically drives this only over the visible
    /// horizontal slice. Errors are yielded in place so the consumer can
    /// skip or hold the affected segment and keep going.
    pub fn trace_points<'a>(
        &'a self,
        samples: &'a [f32],
    ) -> impl Iterator<Item = Result<PixelPoint, SampleError>> + 'a {
        samples
            .iter()
            .enumerate()
            .map(move |(i, &value)| self.sample_pixel(i as u32, value))
    }
}
