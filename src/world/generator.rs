//! Chunk generation collaborators
//!
//! A [`HeightSource`] decides the surface height of every world column and
//! [`LayeredGenerator`] turns it into stone, dirt and grass layers. The flat
//! source reproduces the classic flat world; the noise source uses FastNoiseLite.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::chunk::Chunk;
use crate::core::coords::ChunkCoord;

/// Fills a freshly created chunk. Must be deterministic for a given coordinate.
pub trait TerrainGenerator {
    fn generate(&self, chunk: &mut Chunk, coord: ChunkCoord);
}

/// Surface height (y of the topmost solid block) for a world column.
pub trait HeightSource {
    fn surface_height(&self, world_x: i32, world_z: i32) -> i32;
}

/// Constant-height flat world.
#[derive(Clone, Copy, Debug)]
pub struct FlatHeight {
    pub height: i32,
}

impl Default for FlatHeight {
    fn default() -> Self {
        FlatHeight {
            height: GROUND_HEIGHT,
        }
    }
}

impl HeightSource for FlatHeight {
    fn surface_height(&self, _world_x: i32, _world_z: i32) -> i32 {
        self.height
    }
}

/// Rolling hills from two FastNoiseLite layers.
pub struct NoiseHeight {
    noise_terrain: FastNoiseLite,
    noise_detail: FastNoiseLite,
    base_height: f32,
    amplitude: f32,
    pub seed: u32,
}

impl NoiseHeight {
    pub fn new(seed: u32, base_height: i32, amplitude: f32) -> Self {
        NoiseHeight {
            noise_terrain: Self::create_fbm_noise(seed, 0.008),
            noise_detail: Self::create_noise(seed.wrapping_add(1), 0.05),
            base_height: base_height as f32,
            amplitude,
            seed,
        }
    }

    fn create_noise(seed: u32, frequency: f32) -> FastNoiseLite {
        let mut noise = FastNoiseLite::with_seed(seed as i32);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(frequency));
        noise
    }

    fn create_fbm_noise(seed: u32, frequency: f32) -> FastNoiseLite {
        let mut noise = FastNoiseLite::with_seed(seed as i32);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_fractal_type(Some(FractalType::FBm));
        noise.set_fractal_octaves(Some(4));
        noise.set_fractal_lacunarity(Some(2.0));
        noise.set_fractal_gain(Some(0.5));
        noise.set_frequency(Some(frequency));
        noise
    }
}

impl HeightSource for NoiseHeight {
    fn surface_height(&self, world_x: i32, world_z: i32) -> i32 {
        let fx = world_x as f32;
        let fz = world_z as f32;
        let terrain = self.noise_terrain.get_noise_2d(fx, fz);
        let detail = self.noise_detail.get_noise_2d(fx, fz);

        let height = self.base_height + terrain * self.amplitude + detail * 2.0;
        (height as i32).clamp(3, CHUNK_HEIGHT - 1)
    }
}

/// Stone below, two layers of dirt, one layer of grass, air above.
pub struct LayeredGenerator {
    height: Box<dyn HeightSource>,
}

impl LayeredGenerator {
    pub fn new(height: Box<dyn HeightSource>) -> Self {
        LayeredGenerator { height }
    }

    pub fn flat(height: i32) -> Self {
        Self::new(Box::new(FlatHeight { height }))
    }

    /// Noise hills of amplitude 12 around `base_height`.
    pub fn noise(seed: u32, base_height: i32) -> Self {
        Self::new(Box::new(NoiseHeight::new(seed, base_height, 12.0)))
    }

    pub fn surface_height(&self, world_x: i32, world_z: i32) -> i32 {
        self.height.surface_height(world_x, world_z)
    }
}

impl Default for LayeredGenerator {
    fn default() -> Self {
        Self::flat(GROUND_HEIGHT)
    }
}

impl TerrainGenerator for LayeredGenerator {
    fn generate(&self, chunk: &mut Chunk, coord: ChunkCoord) {
        let origin = coord.origin();

        for lx in 0..CHUNK_WIDTH {
            for lz in 0..CHUNK_DEPTH {
                let ground = self.height.surface_height(origin.x + lx, origin.z + lz);

                chunk.fill_column(lx, lz, 0, ground - 2, BlockType::Stone);
                chunk.fill_column(lx, lz, ground - 2, ground, BlockType::Dirt);
                chunk.fill_column(lx, lz, ground, ground + 1, BlockType::Grass);
            }
        }
    }
}

/// Generator that leaves chunks empty; useful for hand-built worlds.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyGenerator;

impl TerrainGenerator for EmptyGenerator {
    fn generate(&self, _chunk: &mut Chunk, _coord: ChunkCoord) {}
}
