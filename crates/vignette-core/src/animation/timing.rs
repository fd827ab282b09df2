//! Pure functions for animation progress and interpolation.

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
///
/// A non-positive duration counts as already complete.
#[inline]
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Convert a millisecond setting into seconds
#[inline]
pub fn millis_to_secs(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

/// Check that a duration or interval is usable for scheduling
#[inline]
pub fn is_valid_span(span: f64) -> bool {
    span.is_finite() && span > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        for (a, b) in [(3.5, -7.25), (-100.0, 100.0), (0.1, 0.3)] {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn test_lerp_monotonic() {
        for (a, b) in [(0.0, 10.0), (10.0, -5.0)] {
            let mut prev = lerp(a, b, 0.0);
            for i in 1..=100 {
                let v = lerp(a, b, i as f64 / 100.0);
                if b >= a {
                    assert!(v >= prev);
                } else {
                    assert!(v <= prev);
                }
                prev = v;
            }
        }
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(progress(-1.0, 2.0), 0.0);
        assert_eq!(progress(1.0, 2.0), 0.5);
        assert_eq!(progress(5.0, 2.0), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(0.0, 0.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_valid_span() {
        assert!(is_valid_span(0.016));
        assert!(!is_valid_span(0.0));
        assert!(!is_valid_span(-1.0));
        assert!(!is_valid_span(f64::NAN));
        assert!(!is_valid_span(f64::INFINITY));
    }
}
