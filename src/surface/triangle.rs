#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Three indices into the owning surface's vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First corner.
    pub i0: u32,
    /// Second corner.
    pub i1: u32,
    /// Third corner.
    pub i2: u32,
}

impl Triangle {
    /// Creates a triangle from three vertex indices.
    #[must_use]
    pub const fn new(i0: u32, i1: u32, i2: u32) -> Self {
        Self { i0, i1, i2 }
    }

    /// Returns the corners in winding order.
    #[must_use]
    pub const fn indices(&self) -> [u32; 3] {
        [self.i0, self.i1, self.i2]
    }

    /// Returns `true` if any corner references `index`.
    #[must_use]
    pub const fn contains(&self, index: u32) -> bool {
        self.i0 == index || self.i1 == index || self.i2 == index
    }

    /// Returns a triangle with every corner passed through `f`.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(u32) -> u32) -> Self {
        Self::new(f(self.i0), f(self.i1), f(self.i2))
    }
}

impl From<[u32; 3]> for Triangle {
    fn from([i0, i1, i2]: [u32; 3]) -> Self {
        Self::new(i0, i1, i2)
    }
}

impl From<Triangle> for [u32; 3] {
    fn from(t: Triangle) -> Self {
        t.indices()
    }
}
