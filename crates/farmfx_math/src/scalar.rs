//! Scalar easing helpers

/// Linear interpolation from `a` to `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp `v` into `[lo, hi]`
#[inline]
pub fn constrain(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Re-map `value` from one range to another
///
/// With `clamp` set the result stays within the output range, whichever
/// direction it runs. A degenerate input range maps to `out_lo`.
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32, clamp: bool) -> f32 {
    let span = in_hi - in_lo;
    if span == 0.0 {
        return out_lo;
    }
    let mapped = out_lo + (value - in_lo) / span * (out_hi - out_lo);
    if clamp {
        if out_lo < out_hi {
            constrain(mapped, out_lo, out_hi)
        } else {
            constrain(mapped, out_hi, out_lo)
        }
    } else {
        mapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
        assert_eq!(lerp(10.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_map_range_reversed_output_clamps() {
        // Boundary fade: 1 inside the margin, 0 at the edge
        assert_eq!(map_range(50.0, 100.0, 200.0, 1.0, 0.0, true), 1.0);
        assert_eq!(map_range(150.0, 100.0, 200.0, 1.0, 0.0, true), 0.5);
        assert_eq!(map_range(250.0, 100.0, 200.0, 1.0, 0.0, true), 0.0);
    }

    #[test]
    fn test_map_range_unclamped_extrapolates() {
        assert_eq!(map_range(20.0, 0.0, 10.0, 0.0, 100.0, false), 200.0);
    }

    #[test]
    fn test_map_range_degenerate_input() {
        assert_eq!(map_range(5.0, 3.0, 3.0, 7.0, 9.0, true), 7.0);
    }

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(5.0, -1.0, 1.0), 1.0);
        assert_eq!(constrain(-5.0, -1.0, 1.0), -1.0);
        assert_eq!(constrain(0.5, -1.0, 1.0), 0.5);
    }
}
