//! Player body: gravity, walking and jumping around the voxel collision
//! resolver.

use glam::Vec3;

use crate::constants::*;
use crate::physics::aabb::Aabb;
use crate::physics::collision::{BlockAccess, resolve_collision};
use crate::player::camera::Camera;
use crate::player::input::InputState;

const MAX_SUBSTEPS: u32 = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Feet position, at the bottom center of the bounding box.
    pub position: Vec3,
    pub velocity: Vec3,
    pub size: Vec3,
    pub on_ground: bool,
}

impl Body {
    pub fn new(spawn: Vec3) -> Self {
        Body {
            position: spawn,
            velocity: Vec3::ZERO,
            size: Vec3::new(PLAYER_WIDTH * 2.0, PLAYER_HEIGHT, PLAYER_WIDTH * 2.0),
            on_ground: false,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.position + Vec3::Y * (self.size.y / 2.0)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.center(), self.size)
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * PLAYER_EYE_HEIGHT
    }

    /// Sets horizontal velocity from the movement keys relative to the
    /// camera's yaw and starts a jump when standing on ground.
    pub fn apply_input(&mut self, input: &InputState, camera: &Camera) {
        let mut move_dir = Vec3::ZERO;

        if input.is_moving() {
            if input.forward {
                move_dir += camera.forward();
            }
            if input.backward {
                move_dir -= camera.forward();
            }
            if input.left {
                move_dir -= camera.right();
            }
            if input.right {
                move_dir += camera.right();
            }
            move_dir = move_dir.normalize_or_zero() * PLAYER_BASE_SPEED;
        }

        self.velocity.x = move_dir.x;
        self.velocity.z = move_dir.z;

        if input.jump && self.on_ground {
            self.velocity.y = PLAYER_JUMP_VELOCITY;
            self.on_ground = false;
        }
    }

    /// Integrates gravity and moves through `grid`. Steps whose displacement
    /// exceeds [`MAX_STEP_DISPLACEMENT`] are split into equal sub-steps so a
    /// fast body cannot skip over a thin layer of blocks.
    pub fn step<B: BlockAccess + ?Sized>(&mut self, grid: &B, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        self.velocity.y = (self.velocity.y - GRAVITY * dt).max(-TERMINAL_VELOCITY);

        let displacement = self.velocity.length() * dt;
        let substeps = ((displacement / MAX_STEP_DISPLACEMENT).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let sub_dt = dt / substeps as f32;

        let half_height = Vec3::Y * (self.size.y / 2.0);
        let mut center = self.center();
        let mut on_ground = false;
        for _ in 0..substeps {
            let aabb = Aabb::new(center, self.size);
            let result = resolve_collision(grid, &aabb, center, self.velocity, sub_dt);
            center = result.position;
            self.velocity = result.velocity;
            on_ground |= result.on_ground;
        }

        self.position = center - half_height;
        self.on_ground = on_ground;
    }
}
