//! Calibrated background grid.
//!
//! The grid is a lattice of lines one [`grid
//! pitch`](super::Geometry::grid_pitch_px) apart, with every fifth line
//! tagged [`GridWeight::Major`] (5 mm on paper). The engine only
//! enumerates offsets and tags; stroke style per tag is the renderer's
//! choice.

use super::Geometry;

/// Stroke class of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridWeight {
    /// 1 mm line, every grid pitch.
    Minor,
    /// 5 mm line, every fifth grid pitch (index 0 included).
    Major,
}

/// One grid line: its offset along the perpendicular axis, and its weight.
///
/// Vertical lines carry an x offset; horizontal lines carry a y offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Offset from the strip origin, in pixels.
    pub offset_px: f64,
    /// Minor or major stroke class.
    pub weight: GridWeight,
}

fn lines(pitch_px: f64, extent_px: f64) -> impl Iterator<Item = GridLine> {
    let count = if pitch_px > 0.0 {
        (extent_px / pitch_px) as u32
    } else {
        0
    };
    (0..count).map(move |i| GridLine {
        offset_px: f64::from(i) * pitch_px,
        weight: if i % 5 == 0 {
            GridWeight::Major
        } else {
            GridWeight::Minor
        },
    })
}

impl Geometry {
    /// Vertical grid line x offsets, left to right.
    ///
    /// Lazy, finite, and restartable: each call produces a fresh
    /// iterator. The lattice spans the full content width, widened to at
    /// least the viewport so a short strip still shows a full grid.
    pub fn vertical_grid_lines(&self) -> impl Iterator<Item = GridLine> {
        lines(
            self.grid_pitch_px,
            self.content_width_px.max(self.viewport.width),
        )
    }

    /// Horizontal grid line y offsets, top to bottom.
    pub fn horizontal_grid_lines(&self) -> impl Iterator<Item = GridLine> {
        lines(self.grid_pitch_px, self.viewport.height)
    }
}
