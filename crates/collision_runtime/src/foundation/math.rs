//! Math utilities and types
//!
//! Provides the 2D math types used by the collision runtime. World space is a
//! single unit (pixels in the usual case) with `y` pointing down, so a
//! positive angle rotates clockwise on screen.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D rotation type
pub type Rot2 = Rotation2<f32>;

/// Build a rotation from an angle in degrees (clockwise-positive on screen)
pub fn rotation_from_degrees(degrees: f32) -> Rot2 {
    Rot2::new(degrees.to_radians())
}

/// Rotate `point` about `pivot` by `degrees`
pub fn rotate_about(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    pivot + rotation_from_degrees(degrees) * (point - pivot)
}

/// Clamp `value` into `[min, max]` without panicking when `min > max`
///
/// The lower bound is applied first, so an inverted range resolves to `max`.
pub fn clamp_lenient(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
