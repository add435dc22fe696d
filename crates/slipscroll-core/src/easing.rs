//! Pure interpolation helpers
//!
//! The engine chases the native scroll offset with exponential smoothing:
//! every tick the eased value moves a fixed fraction of the remaining
//! distance. These functions have no side effects.

use tracing::warn;

/// Distance cap used when deriving scroll speed, so very large jumps do not
/// produce unbounded output.
pub const MAX_SPEED_DISTANCE: f64 = 200.0;

/// Smallest usable easing factor after clamping.
pub const MIN_EASE: f64 = 0.001;

/// Linear interpolation of `current` toward `target` by `factor`.
#[inline]
pub fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// Round to 3 decimal digits.
///
/// Applied after every interpolation step so repeated ticks cannot
/// accumulate floating drift and equality checks stay deterministic.
#[inline]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Distance-based scroll speed proxy, normalized to [0, 1].
///
/// `min(|distance|, 200) / 200` — the distance between the raw and eased
/// positions, capped at [`MAX_SPEED_DISTANCE`].
#[inline]
pub fn scroll_speed(distance: f64) -> f64 {
    distance.abs().min(MAX_SPEED_DISTANCE) / MAX_SPEED_DISTANCE
}

/// Clamp an easing factor into (0, 1].
///
/// Out-of-range or non-finite values are coerced rather than rejected, with
/// a warning naming the offending option.
pub fn clamp_ease(value: f64, name: &str) -> f64 {
    if !value.is_finite() {
        warn!(option = name, value, "easing factor is not finite, using {}", MIN_EASE);
        return MIN_EASE;
    }
    if value <= 0.0 || value > 1.0 {
        let clamped = value.clamp(MIN_EASE, 1.0);
        warn!(option = name, value, clamped, "easing factor out of (0, 1], clamping");
        return clamped;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(100.0, 0.0, 0.25) - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_round3() {
        assert!((round3(1.23456) - 1.235).abs() < f64::EPSILON);
        assert!((round3(-0.0004) - 0.0).abs() < f64::EPSILON);
        assert!((round3(2.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scroll_speed_bounds() {
        assert!((scroll_speed(0.0) - 0.0).abs() < 0.001);
        assert!((scroll_speed(100.0) - 0.5).abs() < 0.001);
        assert!((scroll_speed(-100.0) - 0.5).abs() < 0.001);
        assert!((scroll_speed(200.0) - 1.0).abs() < 0.001);
        // a huge jump is still capped at 1
        assert!((scroll_speed(10_000.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_ease() {
        assert!((clamp_ease(0.1, "scroll_ease") - 0.1).abs() < f64::EPSILON);
        assert!((clamp_ease(1.0, "scroll_ease") - 1.0).abs() < f64::EPSILON);
        assert!((clamp_ease(0.0, "scroll_ease") - MIN_EASE).abs() < f64::EPSILON);
        assert!((clamp_ease(-3.0, "scroll_ease") - MIN_EASE).abs() < f64::EPSILON);
        assert!((clamp_ease(4.0, "scroll_ease") - 1.0).abs() < f64::EPSILON);
        assert!((clamp_ease(f64::NAN, "scroll_ease") - MIN_EASE).abs() < f64::EPSILON);
    }
}
