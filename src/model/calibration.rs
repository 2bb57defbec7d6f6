//! Calibration value types.
//!
//! The amplitude and time scales of an ECG strip come from small clinically
//! standard sets, so both are enums rather than open floats: an invalid
//! scale is unrepresentable, and config loading maps free-form numbers onto
//! the sets explicitly. The remaining fields (gain, sampling rate, grid
//! divisions) are open-valued and validated by
//! [`CalibrationParams::validate`] before any geometry math runs.

use super::error::CalibrationError;

/// Vertical amplitude scale in millimetres of trace per millivolt.
///
/// One grid division represents 1 mm, so a 1 mV deflection spans
/// `mm_per_mv` grid divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MmPerMv {
    /// 4 mm/mV - quarter amplitude.
    Four,
    /// 5 mm/mV - half amplitude.
    Five,
    /// 10 mm/mV - standard clinical amplitude.
    #[default]
    Ten,
    /// 20 mm/mV - double amplitude.
    Twenty,
}

impl MmPerMv {
    /// Millimetres of trace per millivolt as a scale factor.
    pub fn millimetres(self) -> f64 {
        match self {
            Self::Four => 4.0,
            Self::Five => 5.0,
            Self::Ten => 10.0,
            Self::Twenty => 20.0,
        }
    }

    /// Map a numeric value onto the standard set.
    ///
    /// Returns `None` for values outside {4, 5, 10, 20}. Used by config
    /// loading; exact comparison is intended since these are round
    /// constants, not measurements.
    pub fn from_value(value: f64) -> Option<Self> {
        match value {
            v if v == 4.0 => Some(Self::Four),
            v if v == 5.0 => Some(Self::Five),
            v if v == 10.0 => Some(Self::Ten),
            v if v == 20.0 => Some(Self::Twenty),
            _ => None,
        }
    }
}

/// Horizontal time scale in millimetres of trace per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSpeed {
    /// 12.5 mm/s - half speed, compresses the strip.
    Mm12_5,
    /// 25 mm/s - standard clinical paper speed.
    #[default]
    Mm25,
    /// 50 mm/s - double speed, stretches the strip.
    Mm50,
}

impl PaperSpeed {
    /// Millimetres of trace per second as a scale factor.
    pub fn mm_per_sec(self) -> f64 {
        match self {
            Self::Mm12_5 => 12.5,
            Self::Mm25 => 25.0,
            Self::Mm50 => 50.0,
        }
    }

    /// Map a numeric value onto the standard set.
    ///
    /// Returns `None` for values outside {12.5, 25, 50}.
    pub fn from_value(value: f64) -> Option<Self> {
        match value {
            v if v == 12.5 => Some(Self::Mm12_5),
            v if v == 25.0 => Some(Self::Mm25),
            v if v == 50.0 => Some(Self::Mm50),
            _ => None,
        }
    }
}

/// Immutable calibration parameter set for one geometry recomputation.
///
/// A value type: changing any parameter means building a new set and
/// recomputing geometry from it, never mutating a live one. Defaults match
/// the common clinical configuration (10 mm/mV, 25 mm/s, gain 2000,
/// 250 Hz, 40 grid divisions per viewport height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationParams {
    /// Number of equal vertical grid divisions spanning the viewport
    /// height. The grid pitch (pixels per millimetre) derives from this.
    pub grid_divisions_per_height: u32,

    /// Amplitude scale.
    pub mm_per_mv: MmPerMv,

    /// Divisor converting one raw sample unit to millivolts
    /// (`sample / gain_divisor = mV`). Must be strictly positive.
    pub gain_divisor: f64,

    /// Horizontal time scale.
    pub paper_speed: PaperSpeed,

    /// Samples per second in the lead data sequence. Must be non-zero.
    pub sampling_rate_hz: u32,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self {
            grid_divisions_per_height: 40,
            mm_per_mv: MmPerMv::default(),
            gain_divisor: 2000.0,
            paper_speed: PaperSpeed::default(),
            sampling_rate_hz: 250,
        }
    }
}

impl CalibrationParams {
    /// Check that every field a pitch formula divides by is usable.
    ///
    /// Runs before any geometry math so division by zero can never occur.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if self.sampling_rate_hz == 0 {
            return Err(CalibrationError::ZeroSamplingRate);
        }
        if self.grid_divisions_per_height == 0 {
            return Err(CalibrationError::ZeroGridDivisions);
        }
        if !(self.gain_divisor > 0.0) {
            return Err(CalibrationError::NonPositiveGain {
                value: self.gain_divisor,
            });
        }
        Ok(())
    }
}

/// Size of the visible drawing surface in pixels.
///
/// Mutable only by constructing a new value at an explicit resize; the
/// engine never adjusts it on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check that both extents are strictly positive and finite.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if !(self.width > 0.0) || !(self.height > 0.0) || !self.width.is_finite() || !self.height.is_finite() {
            return Err(CalibrationError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
