use tracing::{debug, info};

use crate::composite::{CompositeArray, PrimitiveTopology};
use crate::error::Result;
use crate::host::HostMesh;
use crate::surface::Surface;

/// Collects surfaces and submits them to a host mesh.
///
/// One composite array is kept as scratch space and refilled for every
/// surface, so repeated submissions do not reallocate the column buffers.
#[derive(Debug, Default)]
pub struct SurfaceBuilder {
    /// Surfaces to submit, in order.
    pub surfaces: Vec<Surface>,
    topology: PrimitiveTopology,
    scratch: CompositeArray,
}

impl SurfaceBuilder {
    /// Creates an empty builder submitting triangle lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the topology tag passed to the host on submission.
    #[must_use]
    pub fn with_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Topology tag passed to the host on submission.
    #[must_use]
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Appends a surface.
    pub fn push(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    /// Encodes every surface and adds it to `mesh`, then names it and
    /// assigns its material. Returns the number of surfaces submitted.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error reported by the host.
    pub fn add_surfaces_to_mesh(&mut self, mesh: &mut impl HostMesh) -> Result<usize> {
        for surface in &self.surfaces {
            self.scratch.populate_from(surface);
            let slot = mesh.add_surface_from_arrays(self.topology, &self.scratch)?;
            mesh.set_surface_name(slot, &surface.name)?;
            if let Some(material) = surface.material {
                mesh.set_surface_material(slot, material)?;
            }
            debug!(
                slot,
                name = %surface.name,
                vertices = surface.vertices.len(),
                triangles = surface.triangles.len(),
                "submitted surface"
            );
        }
        info!(count = self.surfaces.len(), "surfaces added to mesh");
        Ok(self.surfaces.len())
    }
}

impl FromIterator<Surface> for SurfaceBuilder {
    fn from_iter<I: IntoIterator<Item = Surface>>(iter: I) -> Self {
        Self {
            surfaces: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Extend<Surface> for SurfaceBuilder {
    fn extend<I: IntoIterator<Item = Surface>>(&mut self, iter: I) {
        self.surfaces.extend(iter);
    }
}
