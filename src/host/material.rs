use slotmap::SlotMap;

use crate::error::HostError;
use crate::math::Color;

slotmap::new_key_type! {
    /// Handle to a material owned by a [`MaterialLibrary`].
    pub struct MaterialId;
}

/// Data associated with a host material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Display name.
    pub name: String,
    /// Base color.
    pub albedo: Color,
}

impl Material {
    /// Creates a new material.
    #[must_use]
    pub fn new(name: impl Into<String>, albedo: Color) -> Self {
        Self {
            name: name.into(),
            albedo,
        }
    }
}

/// Arena that owns materials referenced by surfaces.
///
/// Surfaces hold [`MaterialId`]s, which are generational indices: a handle
/// to a removed material resolves to nothing rather than to a reused slot.
#[derive(Debug, Default)]
pub struct MaterialLibrary {
    materials: SlotMap<MaterialId, Material>,
}

impl MaterialLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a material and returns its ID.
    pub fn add(&mut self, material: Material) -> MaterialId {
        self.materials.insert(material)
    }

    /// Removes a material, returning it if it existed.
    pub fn remove(&mut self, id: MaterialId) -> Option<Material> {
        self.materials.remove(id)
    }

    /// Returns a reference to the material, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not in the library.
    pub fn get(&self, id: MaterialId) -> Result<&Material, HostError> {
        self.materials
            .get(id)
            .ok_or(HostError::MaterialNotFound)
    }

    /// Returns a mutable reference to the material, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not in the library.
    pub fn get_mut(&mut self, id: MaterialId) -> Result<&mut Material, HostError> {
        self.materials
            .get_mut(id)
            .ok_or(HostError::MaterialNotFound)
    }

    /// Number of materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns `true` if the library holds no materials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
