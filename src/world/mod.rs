//! World storage and management modules
//! Contains chunk generation, the chunk store, and streaming.

pub mod generator;
pub mod streaming;
pub mod terrain;

// Re-export commonly used types
pub use generator::{EmptyGenerator, FlatHeight, HeightSource, LayeredGenerator, NoiseHeight, TerrainGenerator};
pub use streaming::StreamingReport;
pub use terrain::World;
