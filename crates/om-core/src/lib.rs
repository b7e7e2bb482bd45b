//! Core data model and CPU-side geometry for the orbit menu.
//!
//! Everything in this crate is plain data and pure computation: menu
//! items, triangle meshes and their subdivision/spherization, the
//! thumbnail atlas layout and compositing, and RON catalog files.
//! Nothing here touches the GPU; `om-renderer` consumes these types.

pub mod atlas;
pub mod catalog;
pub mod item;
pub mod mesh;
pub mod primitive;

// Re-exports for convenience
pub use atlas::{AtlasLayout, AtlasStyle, compose_atlas};
pub use catalog::{Catalog, CatalogError};
pub use item::{MenuItem, VisualState};
pub use mesh::{Face, Mesh, Vertex};
pub use primitive::{generate_disc, generate_icosahedron};
