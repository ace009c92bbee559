use glam::IVec3;

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::coords::ChunkCoord;
use crate::physics::aabb::Aabb;
use crate::physics::raycast::{RaycastResult, cast};
use crate::player::body::Body;
use crate::player::camera::Camera;
use crate::player::input::BlockIntent;
use crate::render::geometry::GeometryBackend;
use crate::world::terrain::World;

/// Block the player is looking at, within reach.
pub fn target_block<G: GeometryBackend>(
    world: &World<G>,
    body: &Body,
    camera: &Camera,
) -> Option<RaycastResult> {
    cast(world, body.eye_position(), camera.look_direction(), PLAYER_REACH)
}

/// Applies a break or place intent and returns the cell that changed.
pub fn apply_intent<G: GeometryBackend>(
    world: &mut World<G>,
    body: &Body,
    camera: &Camera,
    intent: BlockIntent,
) -> Option<IVec3> {
    let target = target_block(world, body, camera)?;

    let (cell, block) = match intent {
        BlockIntent::Break => (target.hit, BlockType::Air),
        BlockIntent::Place(block) => {
            let cell = target.previous;
            if cell.y < 0 || cell.y >= CHUNK_HEIGHT {
                return None;
            }
            if !world.is_loaded(ChunkCoord::from_block(cell.x, cell.z)) {
                return None;
            }
            if block.is_solid() && Aabb::block(cell).intersects(&body.bounding_box()) {
                return None;
            }
            (cell, block)
        }
    };

    world.set_block(cell.x, cell.y, cell.z, block);
    tracing::debug!("{:?} at ({}, {}, {})", intent, cell.x, cell.y, cell.z);
    Some(cell)
}
