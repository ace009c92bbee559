//! Exact voxel traversal (DDA) for block picking.

use glam::{IVec3, Vec3};

use crate::core::coords::block_at;
use crate::physics::collision::BlockAccess;

/// First solid cell along a ray and the empty cell entered just before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaycastResult {
    pub hit: IVec3,
    pub previous: IVec3,
}

impl RaycastResult {
    /// Unit offset of the face the ray entered `hit` through.
    pub fn face_normal(&self) -> IVec3 {
        self.previous - self.hit
    }
}

/// Walks the cells pierced by the ray from `origin` along `direction`. The
/// cell containing `origin` is never reported. A negative, NaN or infinite
/// `max_distance` casts nothing.
pub fn cast<B: BlockAccess + ?Sized>(
    grid: &B,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<RaycastResult> {
    let length = direction.length();
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    if !(max_distance >= 0.0) || !max_distance.is_finite() {
        return None;
    }
    let dir = direction / length;

    let mut voxel = block_at(origin);
    let mut step = IVec3::ZERO;
    let mut delta_dist = Vec3::splat(f32::INFINITY);
    let mut side_dist = Vec3::splat(f32::INFINITY);

    for axis in 0..3 {
        if dir[axis] == 0.0 {
            continue;
        }
        delta_dist[axis] = (1.0 / dir[axis]).abs();
        if dir[axis] > 0.0 {
            step[axis] = 1;
            side_dist[axis] = (voxel[axis] as f32 + 1.0 - origin[axis]) * delta_dist[axis];
        } else {
            step[axis] = -1;
            side_dist[axis] = (origin[axis] - voxel[axis] as f32) * delta_dist[axis];
        }
    }

    loop {
        let axis = if side_dist.x < side_dist.y {
            if side_dist.x < side_dist.z { 0 } else { 2 }
        } else if side_dist.y < side_dist.z {
            1
        } else {
            2
        };

        let distance = side_dist[axis];
        if !distance.is_finite() || distance > max_distance {
            return None;
        }

        let previous = voxel;
        voxel[axis] += step[axis];
        side_dist[axis] += delta_dist[axis];

        if grid.is_solid_at(voxel) {
            return Some(RaycastResult {
                hit: voxel,
                previous,
            });
        }
    }
}
