//! ecgstrip
//!
//! Waveform layout and scroll physics for a scrollable ECG strip: a
//! calibrated grid, a 1 mV amplitude ruler, and a sample-to-pixel
//! transform, plus touch-drag and inertial-fling scrolling through a
//! virtual canvas much wider than the viewport.
//!
//! The crate is the pure core of such a view. It produces geometric facts
//! ([`layout::Geometry`], grid lines, the ruler path, per-sample pixel
//! positions) and a clamped scroll offset
//! ([`scroll::ScrollController`]); a host view system performs the actual
//! stroking, touch decoding, and velocity estimation and feeds results
//! back in. Nothing here draws, blocks, or touches the file system apart
//! from optional config and log files.
//!
//! A frame of a typical host looks like:
//!
//! ```
//! use ecgstrip::layout::Geometry;
//! use ecgstrip::model::{CalibrationParams, Viewport};
//! use ecgstrip::scroll::{FlingTuning, ScrollController};
//!
//! let lead_data = vec![0.0f32; 2500]; // ten seconds at 250 Hz
//! let geometry = Geometry::compute(
//!     &CalibrationParams::default(),
//!     Viewport::new(800.0, 400.0),
//!     lead_data.len() as u32,
//! )?;
//! let mut scroll = ScrollController::new(geometry.max_scroll_px, FlingTuning::default());
//!
//! // Touch collaborator reported a drag:
//! scroll.begin_drag();
//! scroll.drag_by(-24.0);
//! scroll.end_drag(-900.0);
//!
//! // Render loop, each frame:
//! let offset = scroll.tick(16.0);
//! for point in geometry.trace_points(&lead_data) {
//!     let _visible = point.map(|p| p.x >= offset && p.x <= offset + geometry.viewport.width);
//! }
//! # Ok::<(), ecgstrip::model::CalibrationError>(())
//! ```

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod scroll;

#[cfg(test)]
mod tests;
