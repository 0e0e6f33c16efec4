//! Numeric helpers shared by the sketches.

use nalgebra::Vector2;
use rand::Rng;

/// Linear mapping of `x` from `[from_start, from_end]` onto `[to_start, to_end]`.
///
/// The input range may be reversed; values outside it extrapolate.
pub fn map_linear(x: f32, from_start: f32, from_end: f32, to_start: f32, to_end: f32) -> f32 {
    to_start + (x - from_start) * (to_end - to_start) / (from_end - from_start)
}

/// Random float from the half-open interval `[low, high)`.
pub fn rand_float<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    low + rng.r#gen::<f32>() * (high - low)
}

/// Random value in `[-limit, limit)` that stays outside `(-tolerance, tolerance)`.
///
/// Used for rotation speeds so that nothing sits still or drifts in lockstep
/// with its neighbours.
pub fn avoid_zero<R: Rng + ?Sized>(rng: &mut R, limit: f32, tolerance: f32) -> f32 {
    debug_assert!(tolerance < limit, "tolerance must be smaller than limit");
    loop {
        let value = rand_float(rng, -limit, limit);
        if value <= -tolerance || value >= tolerance {
            return value;
        }
    }
}

/// Rotate `v` about the origin by `theta` radians (clockwise for positive
/// `theta` in a y-up frame).
pub fn rotate_2d(v: Vector2<f32>, theta: f32) -> Vector2<f32> {
    let (sin, cos) = theta.sin_cos();
    Vector2::new(v.x * cos + v.y * sin, v.y * cos - v.x * sin)
}
