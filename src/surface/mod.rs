mod triangle;
mod vertex;

pub use triangle::Triangle;
pub use vertex::Vertex;

use crate::error::SurfaceError;
use crate::host::{ConcaveShape, MaterialId};
use crate::math::Vector3;
use crate::operations::{AutoCalculateNormals, RemoveOrphanVertices, ToShapePoints};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One drawable, collidable part of a mesh.
///
/// A surface owns its vertex and triangle lists. Order matters in both:
/// vertex order is the address space for triangle indices, and triangle
/// order is the draw order. A surface is *well-formed* when every triangle
/// index is below `vertices.len()`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Surface {
    /// Name given to the host surface slot on submission.
    pub name: String,
    /// Vertex list.
    pub vertices: Vec<Vertex>,
    /// Triangle list.
    pub triangles: Vec<Triangle>,
    /// Host material, if any. Not owned by the surface.
    pub material: Option<MaterialId>,
}

impl Surface {
    /// Creates an empty surface with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns this surface with `material` assigned.
    #[must_use]
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the surface has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns `true` if every triangle index addresses an existing vertex.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks that every triangle index addresses an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range index found, in triangle order.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            for index in tri.indices() {
                if index as usize >= vertex_count {
                    return Err(SurfaceError::IndexOutOfRange {
                        triangle,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Recomputes every vertex normal from the triangles that use it.
    ///
    /// See [`AutoCalculateNormals`] for the exact rule. Vertices that no
    /// triangle references keep their existing normal.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the surface untouched, if it is not well-formed.
    pub fn auto_calculate_normals(&mut self) -> Result<(), SurfaceError> {
        AutoCalculateNormals::default().execute(self)
    }

    /// Removes vertices that no triangle references and renumbers the
    /// triangles to match. Returns the number of vertices removed.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the surface untouched, if it is not well-formed.
    pub fn remove_orphan_vertices(&mut self) -> Result<usize, SurfaceError> {
        RemoveOrphanVertices::new().execute(self)
    }

    /// Flattens the triangles into a non-indexed, scaled point list.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is not well-formed.
    pub fn to_shape_points(&self, scale: Vector3) -> Result<Vec<Vector3>, SurfaceError> {
        ToShapePoints::new(scale).execute(self)
    }

    /// Builds a concave collision shape from the scaled triangle soup.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is not well-formed.
    pub fn to_shape(&self, scale: Vector3) -> Result<ConcaveShape, SurfaceError> {
        self.to_shape_points(scale).map(ConcaveShape::new)
    }
}
