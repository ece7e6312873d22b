//! Fixed-size vector/matrix/color math kernel shared by every other module.
//!
//! Vector2/3/4 are thin aliases over `nalgebra`'s vector types so that dot,
//! cross and normalize all come for free; the handful of operations the
//! rasterizer needs beyond that (2D scalar cross, color packing, the
//! row-vector matrix convention) live here as free functions and small
//! wrapper types.

mod color;
mod matrix;

pub use color::ColorRgb;
pub use matrix::Matrix;

use nalgebra as na;

pub type Vector2 = na::Vector2<f32>;
pub type Vector3 = na::Vector3<f32>;
pub type Vector4 = na::Vector4<f32>;

/// Converts degrees to radians; matrices and trig functions in this crate
/// take radians, camera/FOV state is stored in degrees.
pub const TO_RADIANS: f32 = std::f32::consts::PI / 180.0;

/// Signed 2D cross product (`ax*by - ay*bx`), i.e. twice the signed area of
/// the triangle formed by the origin and the two vectors. Used both as the
/// rasterizer's edge function and to compute `2 * triangle_area`.
pub fn cross2d(a: Vector2, b: Vector2) -> f32 {
    a.x * b.y - a.y * b.x
}
