//! Face-culled chunk meshing.
//!
//! Every non-Air cell contributes one quad (two triangles, six unindexed
//! vertices) per face whose neighbor cell is Air. Cells beyond the chunk's
//! lateral borders are read from the neighbor chunks; a neighbor that is not
//! loaded counts as Air so the border stays closed until it streams in.

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::chunk::Chunk;
use crate::core::vertex::Vertex;
use crate::render::atlas_map::{Face, TextureAtlas};

/// The four lateral neighbors of a chunk being meshed.
#[derive(Clone, Copy, Default)]
pub struct ChunkNeighbors<'a> {
    pub pos_x: Option<&'a Chunk>,
    pub neg_x: Option<&'a Chunk>,
    pub pos_z: Option<&'a Chunk>,
    pub neg_z: Option<&'a Chunk>,
}

impl<'a> ChunkNeighbors<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    /// Block at a position relative to the center chunk's origin, which may
    /// lie one step outside it laterally.
    fn sample(&self, center: &Chunk, x: i32, y: i32, z: i32) -> BlockType {
        if y < 0 || y >= CHUNK_HEIGHT {
            return BlockType::Air;
        }

        let (chunk, lx, lz) = if x < 0 {
            (self.neg_x, x + CHUNK_WIDTH, z)
        } else if x >= CHUNK_WIDTH {
            (self.pos_x, x - CHUNK_WIDTH, z)
        } else if z < 0 {
            (self.neg_z, x, z + CHUNK_DEPTH)
        } else if z >= CHUNK_DEPTH {
            (self.pos_z, x, z - CHUNK_DEPTH)
        } else {
            return center.get_block(x, y, z);
        };

        chunk
            .map(|c| c.get_block(lx, y, lz))
            .unwrap_or(BlockType::Air)
    }
}

/// Corner offsets and tile-relative UVs for each face, wound as a quad
/// `c0 c1 c2 c3` and emitted as triangles `(c0, c1, c2)` and `(c2, c3, c0)`.
/// Every quad is counter-clockwise seen from outside the cube.
const FACE_CORNERS: [[([f32; 3], [f32; 2]); 4]; 6] = [
    // Top
    [
        ([0.0, 1.0, 0.0], [0.0, 1.0]),
        ([0.0, 1.0, 1.0], [0.0, 0.0]),
        ([1.0, 1.0, 1.0], [1.0, 0.0]),
        ([1.0, 1.0, 0.0], [1.0, 1.0]),
    ],
    // Bottom
    [
        ([0.0, 0.0, 0.0], [0.0, 1.0]),
        ([1.0, 0.0, 0.0], [1.0, 1.0]),
        ([1.0, 0.0, 1.0], [1.0, 0.0]),
        ([0.0, 0.0, 1.0], [0.0, 0.0]),
    ],
    // East (+X)
    [
        ([1.0, 0.0, 0.0], [1.0, 1.0]),
        ([1.0, 1.0, 0.0], [1.0, 0.0]),
        ([1.0, 1.0, 1.0], [0.0, 0.0]),
        ([1.0, 0.0, 1.0], [0.0, 1.0]),
    ],
    // West (-X)
    [
        ([0.0, 0.0, 0.0], [0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 1.0]),
        ([0.0, 1.0, 1.0], [1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0]),
    ],
    // South (+Z)
    [
        ([0.0, 0.0, 1.0], [0.0, 1.0]),
        ([1.0, 0.0, 1.0], [1.0, 1.0]),
        ([1.0, 1.0, 1.0], [1.0, 0.0]),
        ([0.0, 1.0, 1.0], [0.0, 0.0]),
    ],
    // North (-Z)
    [
        ([0.0, 0.0, 0.0], [1.0, 1.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0]),
        ([1.0, 1.0, 0.0], [0.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 1.0]),
    ],
];

const QUAD_ORDER: [usize; VERTICES_PER_FACE] = [0, 1, 2, 2, 3, 0];

pub fn add_face(
    vertices: &mut Vec<Vertex>,
    x: i32,
    y: i32,
    z: i32,
    face: Face,
    uv_origin: [f32; 2],
    tile_size: f32,
) {
    let corners = &FACE_CORNERS[face.index()];
    for &i in QUAD_ORDER.iter() {
        let (offset, uv) = corners[i];
        vertices.push(Vertex {
            position: [
                x as f32 + offset[0],
                y as f32 + offset[1],
                z as f32 + offset[2],
            ],
            uv: [
                uv_origin[0] + uv[0] * tile_size,
                uv_origin[1] + uv[1] * tile_size,
            ],
        });
    }
}

/// Builds the chunk-local triangle list for `chunk`. An all-Air chunk yields
/// an empty list.
pub fn build_chunk_mesh(
    chunk: &Chunk,
    neighbors: &ChunkNeighbors,
    atlas: &dyn TextureAtlas,
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let tile_size = atlas.tile_size();

    for x in 0..CHUNK_WIDTH {
        for z in 0..CHUNK_DEPTH {
            for y in 0..CHUNK_HEIGHT {
                let block = chunk.get_block(x, y, z);
                if block.is_air() {
                    continue;
                }

                for face in Face::ALL {
                    let [nx, ny, nz] = face.normal();
                    if neighbors.sample(chunk, x + nx, y + ny, z + nz).is_solid() {
                        continue;
                    }
                    let uv = atlas.lookup_uv(block, face);
                    add_face(&mut vertices, x, y, z, face, uv.to_array(), tile_size);
                }
            }
        }
    }

    vertices
}
