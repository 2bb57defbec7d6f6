//! The 1 mV calibration ruler.
//!
//! A fixed step shape drawn at the left edge of the strip: a short run
//! along the baseline, a rise to the 1 mV level, a plateau, and a return
//! to the baseline. The widths are fixed layout constants independent of
//! calibration; only the step height scales, via
//! [`Geometry::ruler_height_px`].

use super::{Geometry, PixelPoint};

/// Gap between the ruler shape and its neighbours on either side.
///
/// Also the x position of the "1 mV" label the renderer places next to
/// the shape.
pub const RULER_MARGIN_PX: f64 = 15.0;

/// Width of the elevated 1 mV plateau segment.
pub const RULER_PLATEAU_WIDTH_PX: f64 = 20.0;

/// Width of each baseline segment before and after the step.
pub const RULER_ZERO_WIDTH_PX: f64 = 15.0;

/// Full horizontal extent reserved for the ruler block. The trace origin
/// sits immediately to its right.
pub const RULER_TOTAL_WIDTH_PX: f64 =
    RULER_PLATEAU_WIDTH_PX + 2.0 * RULER_ZERO_WIDTH_PX + 2.0 * RULER_MARGIN_PX;

/// Half the ruler stroke width, subtracted from the step height so the
/// stroked top edge stays within the 1 mV span.
pub const STROKE_HALF_WIDTH_PX: f64 = 2.0;

impl Geometry {
    /// The six vertices of the calibration step, in stroke order.
    ///
    /// Coordinates are relative to the strip origin at the baseline
    /// (y = 0 is [`baseline_y_px`](Self::baseline_y_px) in viewport
    /// space). The step height carries the sign of the configured axis
    /// orientation.
    pub fn ruler_path(&self) -> [PixelPoint; 6] {
        let rise_x = RULER_MARGIN_PX + RULER_ZERO_WIDTH_PX;
        let fall_x = rise_x + RULER_PLATEAU_WIDTH_PX;
        let h = self.ruler_height_px;
        [
            PixelPoint::new(RULER_MARGIN_PX, 0.0),
            PixelPoint::new(rise_x, 0.0),
            PixelPoint::new(rise_x, h),
            PixelPoint::new(fall_x, h),
            PixelPoint::new(fall_x, 0.0),
            PixelPoint::new(fall_x + RULER_ZERO_WIDTH_PX, 0.0),
        ]
    }
}
