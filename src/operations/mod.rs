//! In-place algorithms and projections over a [`Surface`](crate::surface::Surface).

mod normals;
mod orphans;
mod shape;

pub use normals::{AutoCalculateNormals, IsolatedVertexPolicy};
pub use orphans::RemoveOrphanVertices;
pub use shape::ToShapePoints;
