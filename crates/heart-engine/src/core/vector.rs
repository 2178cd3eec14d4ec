use glam::DVec2;

/// Minimal 2D point/vector in screen or curve space.
///
/// Kept as a plain value type with the mutating length operations the particle
/// code needs; convert to [`DVec2`] for anything heavier.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(&self) -> f64 {
        DVec2::from(*self).length()
    }

    /// Scale to unit length in place.
    ///
    /// The vector must be non-zero. Normalizing a zero vector is a programming
    /// error; debug builds assert on it, release builds produce NaN components.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        debug_assert!(length > 0.0, "cannot normalize a zero-length vector");
        self.x /= length;
        self.y /= length;
        self
    }

    /// Keep the direction, set the magnitude to `length`. Same precondition as
    /// [`normalize`](Self::normalize).
    pub fn set_length(&mut self, length: f64) -> &mut Self {
        self.normalize();
        self.x *= length;
        self.y *= length;
        self
    }

    /// Copy with the same direction and the given magnitude.
    pub fn with_length(mut self, length: f64) -> Self {
        self.set_length(length);
        self
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_euclidean() {
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2::ZERO.length(), 0.0);
    }

    #[test]
    fn normalize_yields_unit_vector() {
        let mut v = Vector2::new(-7.0, 24.0);
        v.normalize();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!(v.x < 0.0 && v.y > 0.0);
    }

    #[test]
    fn with_length_preserves_direction() {
        let samples = [
            Vector2::new(1.0, 0.0),
            Vector2::new(-3.0, 0.5),
            Vector2::new(160.0, -125.0),
            Vector2::new(1e-6, 2e-6),
        ];
        for v in samples {
            for target in [0.5, 1.0, 136.0, 1e4] {
                let scaled = v.with_length(target);
                assert!((scaled.length() - target).abs() < 1e-9 * target.max(1.0));
                // parallel: cross product vanishes, same sign of dot product
                let cross = v.x * scaled.y - v.y * scaled.x;
                assert!(cross.abs() < 1e-6 * v.length() * target);
                assert!(v.x * scaled.x + v.y * scaled.y > 0.0);
            }
        }
    }

    #[test]
    fn with_length_returns_a_copy() {
        let v = Vector2::new(2.0, 2.0);
        let _ = v.with_length(10.0);
        assert_eq!(v, Vector2::new(2.0, 2.0));
    }

    #[test]
    fn set_length_chains() {
        let mut v = Vector2::new(0.0, -2.0);
        let len = v.set_length(5.0).length();
        assert!((len - 5.0).abs() < 1e-12);
        assert!((v.y + 5.0).abs() < 1e-12);
    }

    #[test]
    fn glam_round_trip() {
        let v = Vector2::new(1.5, -2.5);
        let d: DVec2 = v.into();
        assert_eq!(Vector2::from(d), v);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero-length")]
    fn normalize_zero_vector_asserts() {
        Vector2::ZERO.normalize();
    }
}
