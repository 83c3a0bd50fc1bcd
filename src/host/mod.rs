//! Boundary with the host engine.
//!
//! The traits here stand in for the engine objects surfaces are read from
//! and submitted to. [`ArrayMesh`], [`QuadMesh`] and [`MaterialLibrary`] are
//! in-memory implementations for callers without an engine, and for tests.

mod array_mesh;
mod material;
mod primitive;
mod shape;

pub use array_mesh::{ArrayMesh, MeshSurface};
pub use material::{Material, MaterialId, MaterialLibrary};
pub use primitive::QuadMesh;
pub use shape::ConcaveShape;

use tracing::debug;

use crate::composite::{CompositeArray, PrimitiveTopology};
use crate::error::HostError;
use crate::surface::Surface;

/// A host mesh that accepts encoded surfaces.
pub trait HostMesh {
    /// Appends a surface built from `arrays` and returns its slot index.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the arrays.
    fn add_surface_from_arrays(
        &mut self,
        topology: PrimitiveTopology,
        arrays: &CompositeArray,
    ) -> Result<usize, HostError>;

    /// Names the surface in `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if `slot` does not exist.
    fn set_surface_name(&mut self, slot: usize, name: &str) -> Result<(), HostError>;

    /// Assigns a material to the surface in `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if `slot` does not exist.
    fn set_surface_material(&mut self, slot: usize, material: MaterialId) -> Result<(), HostError>;
}

/// A host mesh whose surfaces can be read back as composite arrays.
pub trait SurfaceSource {
    /// Number of surfaces available.
    fn surface_count(&self) -> usize;

    /// Composite array of the surface in `slot`.
    fn surface_arrays(&self, slot: usize) -> Option<CompositeArray>;

    /// Topology of the surface in `slot`.
    fn surface_primitive_type(&self, slot: usize) -> Option<PrimitiveTopology>;
}

/// A procedural host mesh with a single triangle-list surface.
pub trait PrimitiveMesh {
    /// Generates the mesh's composite array.
    fn mesh_arrays(&self) -> CompositeArray;
}

impl Surface {
    /// Decodes the surface of a procedural mesh.
    #[must_use]
    pub fn from_primitive_mesh(mesh: &impl PrimitiveMesh) -> Option<Self> {
        decode_logged(&mesh.mesh_arrays(), PrimitiveTopology::Triangles)
    }

    /// Decodes surface `slot` of a host mesh, using that surface's topology.
    #[must_use]
    pub fn from_array_mesh_surface(mesh: &impl SurfaceSource, slot: usize) -> Option<Self> {
        let Some(arrays) = mesh.surface_arrays(slot) else {
            debug!(slot, "host mesh has no such surface");
            return None;
        };
        let topology = mesh.surface_primitive_type(slot)?;
        decode_logged(&arrays, topology)
    }
}

fn decode_logged(arrays: &CompositeArray, topology: PrimitiveTopology) -> Option<Surface> {
    Surface::try_from_composite_array(arrays, topology)
        .inspect_err(|err| debug!(?topology, %err, "host surface did not decode"))
        .ok()
}
