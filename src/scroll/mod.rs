//! Scroll state and physics.
//!
//! [`ScrollController`] owns the one piece of mutable interactive state in
//! the engine: the horizontal scroll offset and the phase it is being
//! driven in. Phases form a small machine:
//!
//! ```text
//! Idle --begin_drag--> Dragging --end_drag (fast)--> Flinging --tick*--> Idle
//!                          |                            |
//!                          +--end_drag (slow)--> Idle   +--begin_drag--> Dragging
//! ```
//!
//! Every interaction terminates in `Idle`. All offset arithmetic clamps to
//! `[0, max_scroll_px]`; out-of-range input is routine (dragging past an
//! edge) and is never an error. Out-of-phase calls are ignored with a
//! warning rather than panicking, since touch streams routinely deliver
//! stray events.
//!
//! The controller is synchronous and externally driven: the render loop
//! calls [`tick`](ScrollController::tick) at its own cadence and consumes
//! the returned offset. Nothing here schedules work or blocks, so the only
//! cancellation path, a touch-down during a fling, is a plain synchronous
//! state change.

pub mod fling;

pub use fling::FlingTuning;

use fling::{decay_velocity, travel};

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// At rest; offset changes only via `resize` or `jump_to_start`.
    Idle,
    /// A finger is down and drag deltas are being applied.
    Dragging,
    /// Coasting after release; advanced by `tick`.
    Flinging,
}

/// What a drag release turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Release velocity exceeded the fling threshold; the controller is
    /// now flinging.
    Fling,
    /// Release was slow; the interaction may have been a tap. Whether the
    /// cumulative drag distance was small enough to count as one is the
    /// caller's judgement, not the controller's.
    TapCandidate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging,
    Flinging { velocity_px_s: f64 },
}

/// Owner of the scroll offset for one strip view.
///
/// Bound to a single view and a single thread; the offset is read each
/// frame together with the current [`Geometry`](crate::layout::Geometry)
/// by the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollController {
    offset_px: f64,
    max_scroll_px: f64,
    phase: Phase,
    tuning: FlingTuning,
}

impl ScrollController {
    /// Create a controller at offset zero for the given scroll range.
    ///
    /// `max_scroll_px` is typically
    /// [`Geometry::max_scroll_px`](crate::layout::Geometry::max_scroll_px);
    /// negative input is treated as an empty range.
    pub fn new(max_scroll_px: f64, tuning: FlingTuning) -> Self {
        Self {
            offset_px: 0.0,
            max_scroll_px: max_scroll_px.max(0.0),
            phase: Phase::Idle,
            tuning,
        }
    }

    /// Current scroll offset in pixels, always within `[0, max_scroll_px]`.
    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    /// Upper bound of the valid scroll range.
    pub fn max_scroll_px(&self) -> f64 {
        self.max_scroll_px
    }

    /// Current phase.
    pub fn phase(&self) -> ScrollPhase {
        match self.phase {
            Phase::Idle => ScrollPhase::Idle,
            Phase::Dragging => ScrollPhase::Dragging,
            Phase::Flinging { .. } => ScrollPhase::Flinging,
        }
    }

    /// Enter `Dragging` on touch-down.
    ///
    /// An active fling is cancelled synchronously and the offset freezes
    /// where it is. While dragging, the touch collaborator is expected to
    /// disallow ancestor interception of the gesture.
    pub fn begin_drag(&mut self) {
        if let Phase::Flinging { velocity_px_s } = self.phase {
            tracing::debug!(velocity_px_s, offset_px = self.offset_px, "fling cancelled by touch");
        }
        self.phase = Phase::Dragging;
    }

    /// Apply a drag delta in view-local pixels and return the new offset.
    ///
    /// Content follows the finger: a positive delta (finger moving right)
    /// decreases the offset. The returned offset is the redraw signal for
    /// the caller. Ignored outside `Dragging`; a non-finite delta is also
    /// ignored, since clamping NaN would poison the offset.
    pub fn drag_by(&mut self, delta_px: f64) -> f64 {
        if self.phase != Phase::Dragging {
            tracing::warn!(delta_px, phase = ?self.phase(), "drag delta ignored outside Dragging");
            return self.offset_px;
        }
        if !delta_px.is_finite() {
            tracing::warn!(delta_px, "non-finite drag delta ignored");
            return self.offset_px;
        }
        self.offset_px = (self.offset_px - delta_px).clamp(0.0, self.max_scroll_px);
        self.offset_px
    }

    /// Release the drag with the velocity the touch collaborator measured.
    ///
    /// Faster than the minimum fling velocity: the magnitude is clamped to
    /// the maximum and the controller starts flinging against the drag
    /// sign, matching the finger-follows-content convention of
    /// [`drag_by`](Self::drag_by). Slower releases settle to `Idle` and
    /// report a tap candidate.
    pub fn end_drag(&mut self, release_velocity_px_s: f64) -> ReleaseOutcome {
        if self.phase != Phase::Dragging {
            tracing::warn!(phase = ?self.phase(), "drag release ignored outside Dragging");
            return ReleaseOutcome::TapCandidate;
        }
        if release_velocity_px_s.abs() > self.tuning.min_fling_velocity_px_s {
            let clamped = release_velocity_px_s
                .clamp(-self.tuning.max_fling_velocity_px_s, self.tuning.max_fling_velocity_px_s);
            self.phase = Phase::Flinging {
                velocity_px_s: -clamped,
            };
            tracing::debug!(velocity_px_s = -clamped, "fling started");
            ReleaseOutcome::Fling
        } else {
            self.phase = Phase::Idle;
            ReleaseOutcome::TapCandidate
        }
    }

    /// Advance an active fling by `elapsed_ms` and return the new offset.
    ///
    /// Called at the render loop's cadence; the controller never schedules
    /// itself. The fling settles to `Idle` when its speed falls below the
    /// rest threshold or the offset reaches the bound it is moving toward,
    /// whichever comes first, with the offset clamped in place. Ignored
    /// outside `Flinging`.
    pub fn tick(&mut self, elapsed_ms: f64) -> f64 {
        let Phase::Flinging { velocity_px_s } = self.phase else {
            tracing::warn!(elapsed_ms, phase = ?self.phase(), "tick ignored outside Flinging");
            return self.offset_px;
        };
        let elapsed_s = (elapsed_ms / 1000.0).max(0.0);
        let next_offset = self.offset_px + travel(velocity_px_s, self.tuning.friction, elapsed_s);
        let next_velocity = decay_velocity(velocity_px_s, self.tuning.friction, elapsed_s);

        // A bound only stops the fling when the velocity points at it;
        // resting exactly on a bound while moving away from it (a fresh
        // fling from offset zero advanced by a zero-length tick) coasts on.
        let hit_start = next_offset <= 0.0 && velocity_px_s < 0.0;
        let hit_end = next_offset >= self.max_scroll_px && velocity_px_s > 0.0;
        if hit_start || hit_end {
            self.offset_px = next_offset.clamp(0.0, self.max_scroll_px);
            self.phase = Phase::Idle;
            tracing::debug!(offset_px = self.offset_px, "fling hit bound");
        } else if next_velocity.abs() < self.tuning.rest_velocity_px_s {
            self.offset_px = next_offset;
            self.phase = Phase::Idle;
            tracing::debug!(offset_px = self.offset_px, "fling settled");
        } else {
            self.offset_px = next_offset;
            self.phase = Phase::Flinging {
                velocity_px_s: next_velocity,
            };
            tracing::trace!(
                offset_px = self.offset_px,
                velocity_px_s = next_velocity,
                "fling tick"
            );
        }
        self.offset_px
    }

    /// Adopt a new scroll range after content width or viewport changed.
    ///
    /// Re-clamps the offset unconditionally, in any phase; a fling in
    /// progress continues from the clamped value. Shrinking the range
    /// below the current offset pulls the offset back in; a range of zero
    /// (content narrower than the viewport) pulls it to the start.
    pub fn resize(&mut self, new_max_scroll_px: f64) {
        self.max_scroll_px = new_max_scroll_px.max(0.0);
        self.offset_px = self.offset_px.clamp(0.0, self.max_scroll_px);
    }

    /// Snap back to the start of the strip.
    ///
    /// For the owner of the calibration setters to call after a change
    /// (e.g. paper speed) rebuilds the strip: any gesture in progress is
    /// dropped and the offset returns to zero.
    pub fn jump_to_start(&mut self) {
        self.offset_px = 0.0;
        self.phase = Phase::Idle;
    }
}
