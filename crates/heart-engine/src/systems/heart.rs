//! The parametric heart outline.
//!
//! One closed-form curve drives both where particles spawn and what the
//! particle sprite looks like.

use std::f64::consts::{PI, TAU};

use crate::core::vector::Vector2;

/// Parameter step used when tracing the outline for the sprite.
pub const CONTOUR_STEP: f64 = 0.01;

/// Point on the heart for `-π <= t <= π`, in curve units (y up).
///
/// The outline spans roughly ±160 horizontally and -125..=132 vertically.
#[inline]
pub fn point_on_heart(t: f64) -> Vector2 {
    Vector2::new(
        160.0 * t.sin().powi(3),
        110.0 * t.cos() - 50.0 * (2.0 * t).cos() - 20.0 * (3.0 * t).cos()
            - 10.0 * (4.0 * t).cos()
            + 25.0,
    )
}

/// Map a uniform sample `u` in `[0, 1)` to a curve parameter in `(-π, π]`.
#[inline]
pub fn spawn_parameter(u: f64) -> f64 {
    PI - TAU * u
}

/// Points along the closed outline: starts at `t = -π` and steps by
/// [`CONTOUR_STEP`] while `t < π`, so the last point sits just past `π`.
pub fn contour() -> impl Iterator<Item = Vector2> {
    std::iter::successors(Some(-PI), |&t| (t < PI).then_some(t + CONTOUR_STEP))
        .map(point_on_heart)
}
