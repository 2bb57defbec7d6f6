//! Error types for the strip engine.
//!
//! Two failure domains exist, mirrored by two `thiserror` enums:
//!
//! - [`CalibrationError`] - a geometry recomputation was attempted with an
//!   invalid parameter set. Fatal to that recomputation only: callers keep
//!   the previously computed geometry and may re-invoke after correcting
//!   the parameters (recomputation is idempotent).
//! - [`SampleError`] - a single raw sample could not be mapped to a pixel
//!   position. Local to that index: the rest of the trace mapping proceeds,
//!   and the renderer decides whether to skip or hold the segment.
//!
//! All scroll-offset arithmetic clamps instead of erroring, since dragging
//! past a content edge is routine input, so the scroll layer defines no
//! error type at all.

use thiserror::Error;

/// Invalid calibration or viewport input to a geometry recomputation.
///
/// Every variant names the specific field that failed validation so the
/// owner of the calibration setters can surface a precise message. The
/// validation runs before any division, so a zero sampling rate or zero
/// grid division count can never reach the pitch formulas.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    /// The sampling rate is zero; the sample pitch would divide by it.
    #[error("Sampling rate must be positive (got 0 Hz)")]
    ZeroSamplingRate,

    /// The vertical grid division count is zero; the grid pitch would
    /// divide by it.
    #[error("Grid divisions per height must be positive (got 0)")]
    ZeroGridDivisions,

    /// The gain divisor is zero or negative. Sample values are divided by
    /// it to obtain millivolts.
    #[error("Gain divisor must be positive (got {value})")]
    NonPositiveGain {
        /// The rejected divisor value.
        value: f64,
    },

    /// The viewport has a non-positive width or height.
    #[error("Viewport must have positive extent (got {width}x{height})")]
    EmptyViewport {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
    },
}

/// A raw sample value that cannot be mapped to a pixel position.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SampleError {
    /// The sample value is NaN or infinite.
    ///
    /// The index is carried so the consumer can hold or skip exactly the
    /// affected polyline segment without aborting the rest of the trace.
    #[error("Non-finite sample value {value} at index {index}")]
    NonFinite {
        /// Index of the offending sample in the lead data sequence.
        index: u32,
        /// The non-finite value as received.
        value: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sampling_rate_display() {
        let err = CalibrationError::ZeroSamplingRate;
        assert_eq!(err.to_string(), "Sampling rate must be positive (got 0 Hz)");
    }

    #[test]
    fn zero_grid_divisions_display() {
        let err = CalibrationError::ZeroGridDivisions;
        assert!(err.to_string().contains("Grid divisions"));
    }

    #[test]
    fn non_positive_gain_display_carries_value() {
        let err = CalibrationError::NonPositiveGain { value: -2000.0 };
        let msg = err.to_string();
        assert!(msg.contains("Gain divisor"));
        assert!(msg.contains("-2000"));
    }

    #[test]
    fn empty_viewport_display_carries_both_extents() {
        let err = CalibrationError::EmptyViewport {
            width: 0.0,
            height: 400.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x400"));
    }

    #[test]
    fn non_finite_sample_display_carries_index() {
        let err = SampleError::NonFinite {
            index: 17,
            value: f32::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("index 17"));
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn non_finite_sample_display_for_infinity() {
        let err = SampleError::NonFinite {
            index: 0,
            value: f32::INFINITY,
        };
        assert!(err.to_string().contains("inf"));
    }
}
