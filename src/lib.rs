//! Mesh surface assembly and composite-array conversion.
//!
//! A [`Surface`] is a row-oriented vertex list plus an indexed triangle
//! list. It converts to and from the columnar [`CompositeArray`] format a
//! host engine uploads in bulk, and supports normal synthesis, orphan
//! vertex removal, and flattening into a collision triangle soup.
//!
//! ```
//! use arraymesh::composite::PrimitiveTopology;
//! use arraymesh::host::{ArrayMesh, QuadMesh};
//! use arraymesh::{Surface, SurfaceBuilder};
//!
//! let mut quad = Surface::from_primitive_mesh(&QuadMesh::default()).unwrap();
//! quad.name = "floor".into();
//! quad.auto_calculate_normals().unwrap();
//!
//! let mut builder = SurfaceBuilder::new();
//! builder.push(quad);
//! let mut mesh = ArrayMesh::new();
//! builder.add_surfaces_to_mesh(&mut mesh).unwrap();
//! assert_eq!(mesh.surfaces()[0].name, "floor");
//! assert_eq!(mesh.surfaces()[0].topology, PrimitiveTopology::Triangles);
//! ```

pub mod builder;
pub mod composite;
pub mod error;
pub mod host;
pub mod math;
pub mod operations;
pub mod surface;

pub use builder::SurfaceBuilder;
pub use composite::CompositeArray;
pub use error::{Error, Result};
pub use surface::{Surface, Triangle, Vertex};
