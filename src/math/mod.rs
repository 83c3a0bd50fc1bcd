mod color;

pub use color::Color;

/// 2D vector type, used for texture coordinates.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3D vector type, used for positions and normals.
pub type Vector3 = nalgebra::Vector3<f32>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f32 = 1e-6;

/// Returns `v` scaled to unit length, or the zero vector if `v` has no length.
#[must_use]
pub fn normalize_or_zero(v: Vector3) -> Vector3 {
    v.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
}
