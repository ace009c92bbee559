//! Rendering-related modules
//! Contains chunk meshing, atlas lookup, and the geometry/draw boundary.

pub mod atlas_map;
pub mod geometry;
pub mod mesh;

// Re-export commonly used types
pub use atlas_map::{Face, GridAtlas, TextureAtlas};
pub use geometry::{ChunkRenderer, DrawCall, GeometryBackend, HeadlessGeometry, MeshHandle};
pub use mesh::{ChunkNeighbors, add_face, build_chunk_mesh};
