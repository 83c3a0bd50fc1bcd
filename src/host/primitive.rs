use crate::composite::{ArrayData, ArraySlot, CompositeArray};
use crate::math::{Vector2, Vector3};

use super::PrimitiveMesh;

/// A flat rectangle in the XY plane, centered on the origin, facing +Z.
///
/// Produces four vertices and two triangles. Like most procedural host
/// meshes it leaves the color slot empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadMesh {
    /// Width and height.
    pub size: Vector2,
}

impl QuadMesh {
    /// Creates a quad of the given size.
    #[must_use]
    pub fn new(size: Vector2) -> Self {
        Self { size }
    }
}

impl Default for QuadMesh {
    fn default() -> Self {
        Self::new(Vector2::new(1.0, 1.0))
    }
}

impl PrimitiveMesh for QuadMesh {
    fn mesh_arrays(&self) -> CompositeArray {
        let w = self.size.x * 0.5;
        let h = self.size.y * 0.5;
        let positions = vec![
            Vector3::new(-w, -h, 0.0),
            Vector3::new(w, -h, 0.0),
            Vector3::new(w, h, 0.0),
            Vector3::new(-w, h, 0.0),
        ];
        let uvs = vec![
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 0.0),
        ];
        CompositeArray::new()
            .with(ArraySlot::Positions, ArrayData::Vector3(positions))
            .with(ArraySlot::Normals, ArrayData::Vector3(vec![Vector3::z(); 4]))
            .with(ArraySlot::Uvs, ArrayData::Vector2(uvs))
            .with(ArraySlot::Indices, ArrayData::Index(vec![0, 2, 1, 0, 3, 2]))
    }
}
