use crate::error::SurfaceError;
use crate::surface::Surface;

/// Removes vertices that no triangle references.
///
/// Surviving vertices keep their relative order. Every triangle index is
/// shifted down by the number of removed vertices that preceded it, so the
/// triangles keep addressing the same vertices.
#[derive(Debug, Default)]
pub struct RemoveOrphanVertices;

impl RemoveOrphanVertices {
    /// Creates a new `RemoveOrphanVertices` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the removal, returning the number of vertices removed.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the surface, if any triangle
    /// index is out of range.
    pub fn execute(&self, surface: &mut Surface) -> Result<usize, SurfaceError> {
        surface.validate()?;

        let mut referenced = vec![false; surface.vertices.len()];
        for tri in &surface.triangles {
            for index in tri.indices() {
                referenced[index as usize] = true;
            }
        }

        // Ascending, so remapping can binary search it.
        let removed: Vec<u32> = (0u32..)
            .zip(&referenced)
            .filter(|&(_, &used)| !used)
            .map(|(index, _)| index)
            .collect();
        if removed.is_empty() {
            return Ok(0);
        }

        let mut flags = referenced.iter();
        surface
            .vertices
            .retain(|_| flags.next().copied().unwrap_or(false));

        for tri in &mut surface.triangles {
            *tri = tri.map(|index| index - shift_for(&removed, index));
        }

        Ok(removed.len())
    }
}

/// Number of removed indices strictly below `index`.
#[allow(clippy::cast_possible_truncation)]
fn shift_for(removed: &[u32], index: u32) -> u32 {
    removed.partition_point(|&r| r < index) as u32
}
