//! Fling deceleration model.
//!
//! Inertial scrolling decays the release velocity exponentially under a
//! fixed friction constant: `v(t) = v0 * e^(-f * t)`. Position advances by
//! the closed-form integral of that curve, so the travel per tick depends
//! only on the velocity at the start of the tick and the elapsed time,
//! never on accumulated float error. Speed is strictly decreasing for any
//! positive elapsed time and crosses any rest threshold in a bounded
//! number of ticks, which is what guarantees a fling terminates.

/// Tuning constants for fling behavior.
///
/// The original platform sourced these from system view configuration;
/// here they are explicit so hosts with different densities or input
/// devices can scale them. All values are in pixels and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingTuning {
    /// Exponential decay rate in 1/s. Higher values stop the fling
    /// sooner; total travel for a release at velocity `v` is `v /
    /// friction`.
    pub friction: f64,

    /// Release speeds at or below this never start a fling; the release
    /// is reported as a tap candidate instead.
    pub min_fling_velocity_px_s: f64,

    /// Release speeds above this are clamped to it before the fling
    /// starts.
    pub max_fling_velocity_px_s: f64,

    /// Speed below which a fling is considered settled.
    pub rest_velocity_px_s: f64,
}

impl Default for FlingTuning {
    fn default() -> Self {
        Self {
            friction: 4.0,
            min_fling_velocity_px_s: 50.0,
            max_fling_velocity_px_s: 8000.0,
            rest_velocity_px_s: 1.0,
        }
    }
}

/// Velocity after `elapsed_s` seconds of decay from `velocity_px_s`.
pub fn decay_velocity(velocity_px_s: f64, friction: f64, elapsed_s: f64) -> f64 {
    velocity_px_s * (-friction * elapsed_s).exp()
}

/// Distance travelled over `elapsed_s` seconds of decay from
/// `velocity_px_s`.
///
/// Closed form of the velocity integral: `v/f * (1 - e^(-f*t))`. Carries
/// the sign of the velocity.
pub fn travel(velocity_px_s: f64, friction: f64, elapsed_s: f64) -> f64 {
    velocity_px_s / friction * (1.0 - (-friction * elapsed_s).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_orders_thresholds_sensibly() {
        let tuning = FlingTuning::default();
        assert!(tuning.rest_velocity_px_s < tuning.min_fling_velocity_px_s);
        assert!(tuning.min_fling_velocity_px_s < tuning.max_fling_velocity_px_s);
        assert!(tuning.friction > 0.0);
    }

    #[test]
    fn velocity_decays_strictly_for_positive_elapsed() {
        let v = decay_velocity(1000.0, 4.0, 0.016);
        assert!(v < 1000.0);
        assert!(v > 0.0);
    }

    #[test]
    fn zero_elapsed_leaves_velocity_unchanged() {
        assert_eq!(decay_velocity(1000.0, 4.0, 0.0), 1000.0);
        assert_eq!(travel(1000.0, 4.0, 0.0), 0.0);
    }

    #[test]
    fn decay_preserves_sign() {
        assert!(decay_velocity(-1000.0, 4.0, 0.016) < 0.0);
        assert!(travel(-1000.0, 4.0, 0.016) < 0.0);
    }

    #[test]
    fn travel_approaches_v_over_f_asymptotically() {
        // Total fling distance for v0 = 2000 px/s at friction 4 is 500 px.
        let total = travel(2000.0, 4.0, 100.0);
        assert!((total - 500.0).abs() < 1e-6);
    }

    #[test]
    fn travel_is_monotonic_in_elapsed_time() {
        let short = travel(1000.0, 4.0, 0.016);
        let long = travel(1000.0, 4.0, 0.032);
        assert!(long > short);
    }

    #[test]
    fn repeated_ticks_compose_like_one_long_tick() {
        let friction = 4.0;
        let v0: f64 = 3000.0;
        // Two 16 ms ticks.
        let d1 = travel(v0, friction, 0.016);
        let v1 = decay_velocity(v0, friction, 0.016);
        let d2 = travel(v1, friction, 0.016);
        // One 32 ms tick.
        let d = travel(v0, friction, 0.032);
        assert!((d1 + d2 - d).abs() < 1e-9);
    }

    #[test]
    fn velocity_crosses_rest_threshold_in_bounded_ticks() {
        let tuning = FlingTuning::default();
        let mut v = tuning.max_fling_velocity_px_s;
        let mut ticks = 0;
        while v.abs() >= tuning.rest_velocity_px_s {
            v = decay_velocity(v, tuning.friction, 0.016);
            ticks += 1;
            assert!(ticks < 10_000, "fling failed to settle");
        }
        // ln(8000) / (4 * 0.016) is about 140 ticks.
        assert!(ticks < 200);
    }
}
