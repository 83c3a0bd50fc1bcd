use crate::error::SurfaceError;
use crate::math::Vector3;
use crate::surface::Surface;

/// Flattens a surface into a scaled, non-indexed triangle soup.
///
/// Triangle `k` becomes points `3k`, `3k + 1` and `3k + 2`, taken from its
/// corners in winding order and scaled per axis.
pub struct ToShapePoints {
    scale: Vector3,
}

impl ToShapePoints {
    /// Creates a new `ToShapePoints` operation.
    #[must_use]
    pub fn new(scale: Vector3) -> Self {
        Self { scale }
    }

    /// Executes the projection.
    ///
    /// # Errors
    ///
    /// Returns an error if any triangle index is out of range.
    pub fn execute(&self, surface: &Surface) -> Result<Vec<Vector3>, SurfaceError> {
        surface.validate()?;
        Ok(surface
            .triangles
            .iter()
            .flat_map(|tri| tri.indices())
            .map(|index| {
                surface.vertices[index as usize]
                    .position
                    .component_mul(&self.scale)
            })
            .collect())
    }
}
