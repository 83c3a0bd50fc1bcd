use crate::math::{Color, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single vertex of a [`Surface`](super::Surface).
///
/// Vertices have no identity of their own: a vertex is addressed by its
/// position in the owning surface's vertex list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Position in model space.
    pub position: Vector3,
    /// Shading normal.
    pub normal: Vector3,
    /// Vertex color.
    pub color: Color,
    /// Texture coordinate.
    pub uv: Vector2,
}

impl Vertex {
    /// Creates a vertex from all of its attributes.
    #[must_use]
    pub fn new(position: Vector3, normal: Vector3, color: Color, uv: Vector2) -> Self {
        Self {
            position,
            normal,
            color,
            uv,
        }
    }

    /// Creates a white vertex at `position` with a zero normal and zero UV.
    ///
    /// ```
    /// use arraymesh::math::{Color, Vector3};
    /// use arraymesh::surface::Vertex;
    ///
    /// let v = Vertex::from_position(Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(v.color, Color::WHITE);
    /// assert_eq!(v.normal, Vector3::zeros());
    /// ```
    #[must_use]
    pub fn from_position(position: Vector3) -> Self {
        Self::new(position, Vector3::zeros(), Color::WHITE, Vector2::zeros())
    }

    /// Returns a copy with the normal replaced.
    #[must_use]
    pub fn with_normal(self, normal: Vector3) -> Self {
        Self { normal, ..self }
    }

    /// Returns a copy with the color replaced.
    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Returns a copy with the texture coordinate replaced.
    #[must_use]
    pub fn with_uv(self, uv: Vector2) -> Self {
        Self { uv, ..self }
    }
}

impl From<Vector3> for Vertex {
    fn from(position: Vector3) -> Self {
        Self::from_position(position)
    }
}
