//! Core data structures for the voxel world
//! Contains blocks, chunks, coordinate transforms, and vertices.

pub mod block;
pub mod chunk;
pub mod coords;
pub mod vertex;

// Re-export commonly used types
pub use block::BlockType;
pub use chunk::Chunk;
pub use coords::{ChunkCoord, world_to_local};
pub use vertex::Vertex;
