//! Swept AABB against the voxel grid.
//!
//! Motion is applied one axis at a time in Y, X, Z order. After each axis the
//! mover's box is tested against every solid cell it overlaps and pushed back
//! to the face it approached from, plus [`SKIN_WIDTH`].

use glam::{IVec3, Vec3};

use crate::constants::SKIN_WIDTH;
use crate::core::block::BlockType;
use crate::physics::aabb::Aabb;

/// Read-only block occupancy, in world coordinates.
pub trait BlockAccess {
    fn block_at(&self, x: i32, y: i32, z: i32) -> BlockType;

    fn is_solid_at(&self, cell: IVec3) -> bool {
        self.block_at(cell.x, cell.y, cell.z).is_solid()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub position: Vec3,
    pub velocity: Vec3,
    pub on_ground: bool,
    pub aabb: Aabb,
}

const AXIS_ORDER: [usize; 3] = [1, 0, 2];

/// Moves the box centered at `position` by `velocity * dt`, stopping it at
/// solid blocks. `aabb` only supplies the mover's size.
pub fn resolve_collision<B: BlockAccess + ?Sized>(
    grid: &B,
    aabb: &Aabb,
    position: Vec3,
    velocity: Vec3,
    dt: f32,
) -> Resolution {
    let size = aabb.size();
    let mut position = position;
    let mut velocity = velocity;
    let mut on_ground = false;
    let mut bounds = Aabb::new(position, size);

    for axis in AXIS_ORDER {
        position[axis] += velocity[axis] * dt;
        bounds = Aabb::new(position, size);

        let (min, max) = bounds.cell_range();
        for y in min.y..max.y {
            for x in min.x..max.x {
                for z in min.z..max.z {
                    let cell = IVec3::new(x, y, z);
                    if !grid.is_solid_at(cell) {
                        continue;
                    }
                    let block = Aabb::block(cell);
                    if !bounds.intersects(&block) {
                        continue;
                    }

                    if velocity[axis] > 0.0 {
                        position[axis] = block.min[axis] - size[axis] / 2.0 - SKIN_WIDTH;
                    } else if velocity[axis] < 0.0 {
                        position[axis] = block.max[axis] + size[axis] / 2.0 + SKIN_WIDTH;
                        if axis == 1 {
                            on_ground = true;
                        }
                    }
                    velocity[axis] = 0.0;
                    bounds = Aabb::new(position, size);
                }
            }
        }
    }

    Resolution {
        position,
        velocity,
        on_ground,
        aabb: bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[derive(Default)]
    struct Cells(FxHashSet<IVec3>);

    impl Cells {
        fn with(cells: &[(i32, i32, i32)]) -> Self {
            Cells(cells.iter().map(|&(x, y, z)| IVec3::new(x, y, z)).collect())
        }
    }

    impl BlockAccess for Cells {
        fn block_at(&self, x: i32, y: i32, z: i32) -> BlockType {
            if self.0.contains(&IVec3::new(x, y, z)) {
                BlockType::Stone
            } else {
                BlockType::Air
            }
        }
    }

    fn body(center: Vec3) -> Aabb {
        Aabb::new(center, Vec3::new(0.6, 2.0, 0.6))
    }

    #[test]
    fn test_lands_on_block_top() {
        let grid = Cells::with(&[(0, 0, 0)]);
        let start = Vec3::new(0.5, 2.005, 0.5);
        let result = resolve_collision(&grid, &body(start), start, Vec3::new(0.0, -5.0, 0.0), 0.016);

        assert!(result.on_ground);
        assert_eq!(result.velocity.y, 0.0);
        assert!((result.position.y - 2.005).abs() < 1e-5);
        assert!((result.aabb.min.y - 1.005).abs() < 1e-5);
    }

    #[test]
    fn test_free_fall_over_unloaded_space() {
        let grid = Cells::default();
        let start = Vec3::new(0.5, 10.0, 0.5);
        let result = resolve_collision(&grid, &body(start), start, Vec3::new(1.0, -5.0, 0.0), 0.1);

        assert!(!result.on_ground);
        assert!((result.position - Vec3::new(0.6, 9.5, 0.5)).length() < 1e-5);
        assert_eq!(result.velocity, Vec3::new(1.0, -5.0, 0.0));
    }

    #[test]
    fn test_wall_stops_x_and_keeps_z() {
        let grid = Cells::with(&[(2, 1, 0), (2, 2, 0), (2, 3, 0), (2, 1, 1), (2, 2, 1), (2, 3, 1)]);
        let start = Vec3::new(1.6, 2.005, 0.5);
        let result = resolve_collision(&grid, &body(start), start, Vec3::new(10.0, 0.0, 2.0), 0.02);

        assert_eq!(result.velocity.x, 0.0);
        assert_eq!(result.velocity.z, 2.0);
        assert!((result.position.x - (2.0 - 0.3 - SKIN_WIDTH)).abs() < 1e-5);
        assert!((result.position.z - 0.54).abs() < 1e-5);
        assert!(!result.on_ground);
    }

    #[test]
    fn test_ceiling_stops_upward_motion() {
        let grid = Cells::with(&[(0, 4, 0)]);
        let start = Vec3::new(0.5, 2.9, 0.5);
        let result = resolve_collision(&grid, &body(start), start, Vec3::new(0.0, 10.0, 0.0), 0.02);

        assert!(!result.on_ground);
        assert_eq!(result.velocity.y, 0.0);
        assert!((result.position.y - (4.0 - 1.0 - SKIN_WIDTH)).abs() < 1e-5);
    }

    #[test]
    fn test_resting_body_stays_grounded_with_gravity() {
        let grid = Cells::with(&[(0, 0, 0), (1, 0, 0), (0, 0, 1), (1, 0, 1)]);
        let mut position = Vec3::new(1.0, 2.005, 1.0);
        let mut velocity = Vec3::ZERO;
        for _ in 0..10 {
            velocity.y -= 30.0 * 0.016;
            let result = resolve_collision(&grid, &body(position), position, velocity, 0.016);
            assert!(result.on_ground);
            position = result.position;
            velocity = result.velocity;
        }
        assert!((position.y - 2.005).abs() < 1e-4);
    }
}
