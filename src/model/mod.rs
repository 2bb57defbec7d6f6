//! Domain value types and error taxonomy.

pub mod calibration;
pub mod error;

pub use calibration::{CalibrationParams, MmPerMv, PaperSpeed, Viewport};
pub use error::{CalibrationError, SampleError};
