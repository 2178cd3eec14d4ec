// extensions/easing.rs
//
// Lifetime curves for particle size and opacity.
// Pure math over a normalized lifetime `t` in [0, 1]; inputs outside are clamped.

/// Cubic ease-out: `(t - 1)^3 + 1`. Starts at 0, decelerates into 1.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t + 1.0
}

/// Linear fade: 1 at the start of life, 0 at the end.
#[inline]
pub fn fade_out(t: f64) -> f64 {
    1.0 - t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_out_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn cubic_out_faster_start() {
        let mid = ease_out_cubic(0.3);
        assert!(mid > 0.3, "ease-out at 0.3 should lead linear, got {}", mid);
    }

    #[test]
    fn fade_is_linear_and_clamped() {
        assert_eq!(fade_out(0.0), 1.0);
        assert_eq!(fade_out(0.25), 0.75);
        assert_eq!(fade_out(1.0), 0.0);
        assert_eq!(fade_out(1.2), 0.0);
        assert_eq!(fade_out(-0.5), 1.0);
    }
}
