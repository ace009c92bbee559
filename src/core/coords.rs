//! World, chunk and local coordinate transforms.
//!
//! Every conversion goes through floor division so that negative world
//! coordinates land in the correct chunk (`-1` belongs to chunk `-1`, local `15`).

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Column position of a chunk in chunk-grid units.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        ChunkCoord { x, z }
    }

    /// Chunk owning the integer world column `(world_x, world_z)`.
    pub fn from_block(world_x: i32, world_z: i32) -> Self {
        ChunkCoord {
            x: world_x.div_euclid(CHUNK_WIDTH),
            z: world_z.div_euclid(CHUNK_DEPTH),
        }
    }

    /// Chunk containing a continuous world position.
    pub fn from_world_pos(position: Vec3) -> Self {
        Self::from_block(position.x.floor() as i32, position.z.floor() as i32)
    }

    /// World-space position of this chunk's `(0, 0, 0)` cell.
    pub fn origin(&self) -> IVec3 {
        IVec3::new(self.x * CHUNK_WIDTH, 0, self.z * CHUNK_DEPTH)
    }

    /// Render translation for this chunk's local-space mesh.
    pub fn translation(&self) -> Vec3 {
        self.origin().as_vec3()
    }

    /// Lateral neighbors in +X, -X, +Z, -Z order.
    pub fn lateral_neighbors(&self) -> [ChunkCoord; 4] {
        [
            ChunkCoord::new(self.x + 1, self.z),
            ChunkCoord::new(self.x - 1, self.z),
            ChunkCoord::new(self.x, self.z + 1),
            ChunkCoord::new(self.x, self.z - 1),
        ]
    }

    /// Chebyshev distance in chunk units.
    pub fn chebyshev_distance(&self, other: &ChunkCoord) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    pub fn distance_squared(&self, other: &ChunkCoord) -> i32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }
}

/// Splits a world block position into its owning chunk and chunk-local cell.
///
/// Local indices are `world - chunk * size`, never the language remainder.
pub fn world_to_local(world_x: i32, world_y: i32, world_z: i32) -> (ChunkCoord, IVec3) {
    let coord = ChunkCoord::from_block(world_x, world_z);
    let local = IVec3::new(
        world_x - coord.x * CHUNK_WIDTH,
        world_y,
        world_z - coord.z * CHUNK_DEPTH,
    );
    (coord, local)
}

/// Inverse of [`world_to_local`].
pub fn local_to_world(coord: ChunkCoord, local: IVec3) -> IVec3 {
    coord.origin() + local
}

/// Integer cell containing a continuous world position.
pub fn block_at(position: Vec3) -> IVec3 {
    position.floor().as_ivec3()
}

pub fn in_chunk_bounds(x: i32, y: i32, z: i32) -> bool {
    (0..CHUNK_WIDTH).contains(&x) && (0..CHUNK_HEIGHT).contains(&y) && (0..CHUNK_DEPTH).contains(&z)
}
