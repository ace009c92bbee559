use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::coords::{ChunkCoord, in_chunk_bounds};
use crate::render::geometry::MeshHandle;
use crate::world::generator::TerrainGenerator;

pub struct Chunk {
    blocks: Box<[BlockType]>,
    mesh: Option<MeshHandle>,
    vertex_count: u32,
    dirty: bool,
}

impl Chunk {
    /// An all-Air chunk that has never been meshed.
    pub fn new() -> Self {
        Chunk {
            blocks: vec![BlockType::Air; CHUNK_VOLUME].into_boxed_slice(),
            mesh: None,
            vertex_count: 0,
            dirty: true,
        }
    }

    pub fn generate(coord: ChunkCoord, generator: &dyn TerrainGenerator) -> Self {
        let mut chunk = Chunk::new();
        generator.generate(&mut chunk, coord);
        chunk.dirty = true;
        chunk
    }

    #[inline]
    fn index(x: i32, y: i32, z: i32) -> usize {
        assert!(
            in_chunk_bounds(x, y, z),
            "local block ({}, {}, {}) outside chunk bounds",
            x,
            y,
            z
        );
        ((y * CHUNK_DEPTH + z) * CHUNK_WIDTH + x) as usize
    }

    /// Panics if the local position is outside `[0,W) x [0,H) x [0,D)`.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        self.blocks[Self::index(x, y, z)]
    }

    /// Panics if the local position is outside `[0,W) x [0,H) x [0,D)`.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        let idx = Self::index(x, y, z);
        self.blocks[idx] = block;
        self.dirty = true;
    }

    /// Fills local `y` range `[y_min, y_max)` of one column without bounds
    /// checks beyond the column itself.
    pub fn fill_column(&mut self, x: i32, z: i32, y_min: i32, y_max: i32, block: BlockType) {
        for y in y_min.max(0)..y_max.min(CHUNK_HEIGHT) {
            self.set_block(x, y, z, block);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.is_air())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn mesh(&self) -> Option<MeshHandle> {
        self.mesh
    }

    /// Detaches the current geometry so the caller can release it.
    pub(crate) fn take_mesh(&mut self) -> Option<MeshHandle> {
        self.vertex_count = 0;
        self.mesh.take()
    }

    /// Installs freshly built geometry and clears the dirty flag.
    pub(crate) fn set_mesh(&mut self, mesh: Option<MeshHandle>, vertex_count: u32) {
        debug_assert!(self.mesh.is_none(), "previous geometry must be released first");
        self.mesh = mesh;
        self.vertex_count = vertex_count;
        self.dirty = false;
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}
