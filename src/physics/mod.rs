//! Physics modules
//! Contains bounding boxes, voxel collision resolution, and raycasting.

pub mod aabb;
pub mod collision;
pub mod raycast;

// Re-export commonly used types
pub use aabb::Aabb;
pub use collision::{BlockAccess, Resolution, resolve_collision};
pub use raycast::{RaycastResult, cast};
