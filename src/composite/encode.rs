use crate::surface::Surface;

use super::{ArraySlot, CompositeArray};

impl Surface {
    /// Encodes this surface into a freshly allocated composite array.
    ///
    /// Every slot is filled: one entry per vertex in the four attribute
    /// slots and three indices per triangle in the index slot.
    #[must_use]
    pub fn to_composite_array(&self) -> CompositeArray {
        let mut arrays = CompositeArray::new();
        arrays.populate_from(self);
        arrays
    }
}

impl CompositeArray {
    /// Overwrites every slot with the contents of `surface`.
    ///
    /// Buffers already holding the right element type are cleared and
    /// refilled in place, so one composite array can be reused as scratch
    /// space across many surfaces.
    pub fn populate_from(&mut self, surface: &Surface) {
        let vertices = &surface.vertices;
        self.fill(ArraySlot::Positions, vertices.iter().map(|v| v.position));
        self.fill(ArraySlot::Normals, vertices.iter().map(|v| v.normal));
        self.fill(ArraySlot::Colors, vertices.iter().map(|v| v.color));
        self.fill(ArraySlot::Uvs, vertices.iter().map(|v| v.uv));
        self.fill(
            ArraySlot::Indices,
            surface.triangles.iter().flat_map(|t| t.indices()),
        );
    }
}
