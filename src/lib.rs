// Core module with fundamental types
pub mod core;

// Physics module with collision and raycasting
pub mod physics;

// Player module with body, camera and input
pub mod player;

// Render module with meshing and the geometry boundary
pub mod render;

// World module with generation, storage and streaming
pub mod world;

// Other modules
pub mod constants;
pub mod session;
pub mod utils;

// Re-exports
pub use constants::*;
pub use crate::core::{BlockType, Chunk, ChunkCoord, Vertex, world_to_local};
pub use physics::{Aabb, BlockAccess, RaycastResult, Resolution, cast, resolve_collision};
pub use player::{BlockIntent, Body, Camera, InputState};
pub use render::{
    ChunkNeighbors, ChunkRenderer, DrawCall, Face, GeometryBackend, GridAtlas, HeadlessGeometry,
    MeshHandle, TextureAtlas, build_chunk_mesh,
};
pub use session::{Session, TickReport};
pub use utils::{SettingsError, WorldSettings};
pub use world::{LayeredGenerator, StreamingReport, TerrainGenerator, World};
