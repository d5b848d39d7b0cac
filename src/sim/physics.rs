//! Scalar and vector helpers for the gravity model
//!
//! Pure functions only; the Ark and the world call these from their tick code.

use glam::Vec2;

use crate::consts::*;

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Magnitude of the gravitational acceleration toward a body of `mass`
/// at squared distance `dist_sq`
#[inline]
pub fn gravity_accel(mass: f32, dist_sq: f32) -> f32 {
    G * mass / dist_sq
}

/// Unit vector along `v` given its already-computed length.
///
/// Returns zero for a zero-length vector instead of NaN.
#[inline]
pub fn normalize(v: Vec2, length: f32) -> Vec2 {
    if length > 0.0 { v / length } else { Vec2::ZERO }
}

/// Circular orbit speed at radius `r` around a body of `mass` (vis-viva with a = r)
#[inline]
pub fn orbital_speed(mass: f32, r: f32) -> f32 {
    (G * mass / r).sqrt()
}

/// Light reaching a panel at `dist` from a star of `mass`.
///
/// The +1 in the denominator keeps the value finite at the star centre.
#[inline]
pub fn solar_flux(mass: f32, dist: f32) -> f32 {
    (mass / FLUX_MASS_DIVISOR) / (dist * dist + 1.0) * FLUX_SCALE
}

/// Unit vector for a heading angle
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
