use crate::math::Vector3;

/// Concave collision volume described as a triangle soup.
///
/// Every three consecutive points form one triangle. No indexing, no
/// shared vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConcaveShape {
    /// Triangle corners, three per triangle.
    pub points: Vec<Vector3>,
}

impl ConcaveShape {
    /// Creates a shape from a flat point list.
    #[must_use]
    pub fn new(points: Vec<Vector3>) -> Self {
        Self { points }
    }

    /// Number of complete triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Iterates over the triangles as corner triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vector3; 3]> + '_ {
        self.points.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}
