use rustc_hash::FxHashMap;

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::chunk::Chunk;
use crate::core::coords::{ChunkCoord, world_to_local};
use crate::physics::collision::BlockAccess;
use crate::render::atlas_map::{GridAtlas, TextureAtlas};
use crate::render::geometry::{ChunkRenderer, DrawCall, GeometryBackend, HeadlessGeometry};
use crate::render::mesh::{ChunkNeighbors, build_chunk_mesh};
use crate::utils::settings::{SettingsError, WorldSettings};
use crate::world::generator::{LayeredGenerator, TerrainGenerator};

/// Sparse store of loaded chunks plus the collaborators needed to generate,
/// mesh and draw them.
pub struct World<G: GeometryBackend = HeadlessGeometry> {
    pub(crate) chunks: FxHashMap<ChunkCoord, Chunk>,
    generator: Box<dyn TerrainGenerator>,
    atlas: Box<dyn TextureAtlas>,
    geometry: G,
    pub(crate) settings: WorldSettings,
}

impl<G: GeometryBackend> World<G> {
    /// Flat world at the default ground height with default settings.
    pub fn new(geometry: G) -> Self {
        World {
            chunks: FxHashMap::default(),
            generator: Box::new(LayeredGenerator::default()),
            atlas: Box::new(GridAtlas::default()),
            geometry,
            settings: WorldSettings::default(),
        }
    }

    pub fn with_settings(settings: WorldSettings, geometry: G) -> Result<Self, SettingsError> {
        settings.validate()?;
        let generator = settings.terrain.build_generator();
        Ok(World {
            chunks: FxHashMap::default(),
            generator: Box::new(generator),
            atlas: Box::new(GridAtlas::default()),
            geometry,
            settings,
        })
    }

    pub fn with_generator(mut self, generator: Box<dyn TerrainGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_atlas(mut self, atlas: Box<dyn TextureAtlas>) -> Self {
        self.atlas = atlas;
        self
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Generates the chunk at `coord` and inserts it, replacing any chunk
    /// already there.
    pub fn create_chunk(&mut self, coord: ChunkCoord) {
        let chunk = Chunk::generate(coord, self.generator.as_ref());
        if let Some(mut old) = self.chunks.insert(coord, chunk) {
            if let Some(handle) = old.take_mesh() {
                self.geometry.release(handle);
            }
            tracing::trace!("Replaced chunk ({}, {})", coord.x, coord.z);
        }
    }

    /// Removes a loaded chunk, frees its geometry and marks its loaded
    /// neighbors dirty so their shared border is re-meshed.
    pub fn unload_chunk(&mut self, coord: ChunkCoord) -> bool {
        let Some(mut chunk) = self.chunks.remove(&coord) else {
            return false;
        };
        if let Some(handle) = chunk.take_mesh() {
            self.geometry.release(handle);
        }
        self.mark_neighbors_dirty(coord);
        true
    }

    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn dirty_count(&self) -> usize {
        self.chunks.values().filter(|c| c.is_dirty()).count()
    }

    pub fn loaded_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    pub(crate) fn mark_neighbors_dirty(&mut self, coord: ChunkCoord) {
        for neighbor in coord.lateral_neighbors() {
            if let Some(chunk) = self.chunks.get_mut(&neighbor) {
                chunk.mark_dirty();
            }
        }
    }

    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        if y < 0 || y >= CHUNK_HEIGHT {
            return BlockType::Air;
        }
        let (coord, local) = world_to_local(x, y, z);

        if let Some(chunk) = self.chunks.get(&coord) {
            chunk.get_block(local.x, local.y, local.z)
        } else {
            BlockType::Air
        }
    }

    /// Writes one block. Writes into unloaded chunks are dropped. Editing a
    /// cell on a lateral chunk border also dirties the chunk across it.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        let (coord, local) = world_to_local(x, y, z);

        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return;
        };
        chunk.set_block(local.x, local.y, local.z, block);

        let mut touched = Vec::with_capacity(2);
        if local.x == 0 {
            touched.push(ChunkCoord::new(coord.x - 1, coord.z));
        } else if local.x == CHUNK_WIDTH - 1 {
            touched.push(ChunkCoord::new(coord.x + 1, coord.z));
        }
        if local.z == 0 {
            touched.push(ChunkCoord::new(coord.x, coord.z - 1));
        } else if local.z == CHUNK_DEPTH - 1 {
            touched.push(ChunkCoord::new(coord.x, coord.z + 1));
        }
        for neighbor in touched {
            if let Some(chunk) = self.chunks.get_mut(&neighbor) {
                chunk.mark_dirty();
            }
        }
    }

    /// Highest non-Air `y` in a loaded column.
    pub fn surface_height(&self, x: i32, z: i32) -> Option<i32> {
        let (coord, local) = world_to_local(x, 0, z);
        let chunk = self.chunks.get(&coord)?;
        (0..CHUNK_HEIGHT)
            .rev()
            .find(|&y| chunk.get_block(local.x, y, local.z).is_solid())
    }

    /// Rebuilds the mesh of every dirty chunk against its current neighbors.
    /// Returns how many chunks were rebuilt.
    pub fn update(&mut self) -> usize {
        let mut dirty: Vec<ChunkCoord> = self
            .chunks
            .iter()
            .filter(|(_, chunk)| chunk.is_dirty())
            .map(|(coord, _)| *coord)
            .collect();
        if dirty.is_empty() {
            return 0;
        }
        dirty.sort();

        let mut total_vertices = 0usize;
        for coord in &dirty {
            let vertices = match self.chunks.get(coord) {
                Some(chunk) => {
                    let neighbors = neighbors_of(&self.chunks, *coord);
                    build_chunk_mesh(chunk, &neighbors, self.atlas.as_ref())
                }
                None => continue,
            };

            let Some(chunk) = self.chunks.get_mut(coord) else {
                continue;
            };
            if let Some(old) = chunk.take_mesh() {
                self.geometry.release(old);
            }
            let handle = if vertices.is_empty() {
                None
            } else {
                Some(self.geometry.upload(&vertices))
            };
            chunk.set_mesh(handle, vertices.len() as u32);

            tracing::trace!(
                "Meshed chunk ({}, {}): {} vertices",
                coord.x,
                coord.z,
                vertices.len()
            );
            total_vertices += vertices.len();
        }

        tracing::debug!(
            "Rebuilt {} chunk meshes ({} vertices)",
            dirty.len(),
            total_vertices
        );
        dirty.len()
    }

    /// Emits one draw call per chunk that has geometry.
    pub fn render(&self, renderer: &mut dyn ChunkRenderer) {
        for (coord, chunk) in &self.chunks {
            if chunk.vertex_count() == 0 {
                continue;
            }
            if let Some(handle) = chunk.mesh() {
                renderer.draw(DrawCall {
                    coord: *coord,
                    handle,
                    vertex_count: chunk.vertex_count(),
                    translation: coord.translation(),
                });
            }
        }
    }
}

impl World<HeadlessGeometry> {
    /// World backed by in-memory geometry.
    pub fn headless() -> Self {
        Self::new(HeadlessGeometry::new())
    }
}

impl Default for World<HeadlessGeometry> {
    fn default() -> Self {
        Self::headless()
    }
}

impl<G: GeometryBackend> BlockAccess for World<G> {
    fn block_at(&self, x: i32, y: i32, z: i32) -> BlockType {
        self.get_block(x, y, z)
    }
}

fn neighbors_of(chunks: &FxHashMap<ChunkCoord, Chunk>, coord: ChunkCoord) -> ChunkNeighbors<'_> {
    let [pos_x, neg_x, pos_z, neg_z] = coord.lateral_neighbors();
    ChunkNeighbors {
        pos_x: chunks.get(&pos_x),
        neg_x: chunks.get(&neg_x),
        pos_z: chunks.get(&pos_z),
        neg_z: chunks.get(&neg_z),
    }
}
