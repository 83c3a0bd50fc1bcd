use crate::composite::{ArraySlot, CompositeArray, PrimitiveTopology, SlotView};
use crate::error::HostError;

use super::{HostMesh, MaterialId, SurfaceSource};

/// One surface held by an [`ArrayMesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSurface {
    /// Surface name, empty until set.
    pub name: String,
    /// How the index buffer is interpreted.
    pub topology: PrimitiveTopology,
    /// The submitted arrays, copied out of the caller's buffers.
    pub arrays: CompositeArray,
    /// Assigned material.
    pub material: Option<MaterialId>,
}

/// In-memory host mesh made of independently submitted surfaces.
#[derive(Debug, Default)]
pub struct ArrayMesh {
    surfaces: Vec<MeshSurface>,
}

impl ArrayMesh {
    /// Creates a mesh with no surfaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All surfaces in slot order.
    #[must_use]
    pub fn surfaces(&self) -> &[MeshSurface] {
        &self.surfaces
    }

    /// Returns the surface in `slot`, or an error if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if `slot` is out of range.
    pub fn surface(&self, slot: usize) -> Result<&MeshSurface, HostError> {
        let count = self.surfaces.len();
        self.surfaces
            .get(slot)
            .ok_or(HostError::SlotOutOfRange { slot, count })
    }

    fn surface_mut(&mut self, slot: usize) -> Result<&mut MeshSurface, HostError> {
        let count = self.surfaces.len();
        self.surfaces
            .get_mut(slot)
            .ok_or(HostError::SlotOutOfRange { slot, count })
    }

    /// Removes every surface.
    pub fn clear_surfaces(&mut self) {
        self.surfaces.clear();
    }
}

/// Host-side sanity checks: positions are mandatory and every other
/// per-vertex slot that is present must match their length.
fn check_arrays(arrays: &CompositeArray) -> Result<(), HostError> {
    let vertex_count = match arrays.positions() {
        SlotView::Present(positions) => positions.len(),
        SlotView::Absent => return Err(HostError::InvalidArrays("missing positions".into())),
        SlotView::WrongType(found) => {
            return Err(HostError::InvalidArrays(format!(
                "positions hold {found:?} data"
            )))
        }
    };
    for slot in [ArraySlot::Normals, ArraySlot::Colors, ArraySlot::Uvs] {
        if let Some(data) = arrays.get(slot) {
            if data.len() != vertex_count {
                return Err(HostError::InvalidArrays(format!(
                    "{slot:?} has {} elements, expected {vertex_count}",
                    data.len()
                )));
            }
        }
    }
    Ok(())
}

impl HostMesh for ArrayMesh {
    fn add_surface_from_arrays(
        &mut self,
        topology: PrimitiveTopology,
        arrays: &CompositeArray,
    ) -> Result<usize, HostError> {
        check_arrays(arrays)?;
        self.surfaces.push(MeshSurface {
            name: String::new(),
            topology,
            arrays: arrays.clone(),
            material: None,
        });
        Ok(self.surfaces.len() - 1)
    }

    fn set_surface_name(&mut self, slot: usize, name: &str) -> Result<(), HostError> {
        name.clone_into(&mut self.surface_mut(slot)?.name);
        Ok(())
    }

    fn set_surface_material(&mut self, slot: usize, material: MaterialId) -> Result<(), HostError> {
        self.surface_mut(slot)?.material = Some(material);
        Ok(())
    }
}

impl SurfaceSource for ArrayMesh {
    fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    fn surface_arrays(&self, slot: usize) -> Option<CompositeArray> {
        self.surfaces.get(slot).map(|s| s.arrays.clone())
    }

    fn surface_primitive_type(&self, slot: usize) -> Option<PrimitiveTopology> {
        self.surfaces.get(slot).map(|s| s.topology)
    }
}
