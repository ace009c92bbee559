//! Fixed-order tick driver: input and physics, block edits, streaming, then
//! meshing. Drawing is a separate call after the tick.

use glam::{IVec3, Vec3};

use crate::player::body::Body;
use crate::player::camera::Camera;
use crate::player::input::InputState;
use crate::player::interaction::apply_intent;
use crate::render::geometry::{ChunkRenderer, GeometryBackend, HeadlessGeometry};
use crate::world::streaming::StreamingReport;
use crate::world::terrain::World;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    pub streaming: StreamingReport,
    pub rebuilt: usize,
    pub edited: Option<IVec3>,
    pub on_ground: bool,
}

pub struct Session<G: GeometryBackend = HeadlessGeometry> {
    pub world: World<G>,
    pub player: Body,
    pub camera: Camera,
}

impl<G: GeometryBackend> Session<G> {
    /// Streams in the chunks around `spawn` and meshes them so the first
    /// tick starts on loaded ground.
    pub fn new(mut world: World<G>, spawn: Vec3) -> Self {
        world.update_chunks_around_player(spawn);
        world.update();
        Session {
            world,
            player: Body::new(spawn),
            camera: Camera::default(),
        }
    }

    /// Spawns on top of the column at `(x, z)`.
    pub fn spawn_at_surface(world: World<G>, x: i32, z: i32) -> Self {
        let column = Vec3::new(x as f32 + 0.5, 0.0, z as f32 + 0.5);
        let mut session = Self::new(world, column);
        let ground = session.world.surface_height(x, z).unwrap_or(0);
        session.player.position.y = (ground + 1) as f32;
        tracing::info!(
            "Spawned at ({:.1}, {:.1}, {:.1})",
            session.player.position.x,
            session.player.position.y,
            session.player.position.z
        );
        session
    }

    pub fn tick(&mut self, input: &InputState, dt: f32) -> TickReport {
        self.camera.rotate(input.look_delta.x, input.look_delta.y);
        self.player.apply_input(input, &self.camera);
        self.player.step(&self.world, dt);

        let edited = input
            .intent
            .and_then(|intent| apply_intent(&mut self.world, &self.player, &self.camera, intent));

        let streaming = self.world.update_chunks_around_player(self.player.position);
        let rebuilt = self.world.update();

        TickReport {
            streaming,
            rebuilt,
            edited,
            on_ground: self.player.on_ground,
        }
    }

    pub fn render(&self, renderer: &mut dyn ChunkRenderer) {
        self.world.render(renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::core::block::BlockType;
    use crate::core::coords::ChunkCoord;
    use crate::player::input::BlockIntent;
    use crate::render::geometry::DrawCall;

    fn session() -> Session {
        Session::spawn_at_surface(World::headless(), 8, 8)
    }

    #[test]
    fn test_spawn_loads_render_radius() {
        let session = session();
        let side = (2 * RENDER_DISTANCE + 1) as usize;
        assert_eq!(session.world.chunk_count(), side * side);
        assert_eq!(session.world.dirty_count(), 0);
        assert_eq!(session.player.position.y, (GROUND_HEIGHT + 1) as f32);
    }

    #[test]
    fn test_idle_ticks_settle_on_ground() {
        let mut session = session();
        let mut report = TickReport::default();
        for _ in 0..10 {
            report = session.tick(&InputState::default(), 0.016);
        }
        assert!(report.on_ground);
        assert_eq!(report.rebuilt, 0);
        assert!(report.streaming.is_empty());
    }

    #[test]
    fn test_walking_streams_new_chunks() {
        let mut session = session();
        let forward = InputState {
            forward: true,
            ..Default::default()
        };
        let mut loaded = 0;
        for _ in 0..200 {
            let report = session.tick(&forward, 0.05);
            loaded += report.streaming.loaded;
            assert_eq!(session.world.dirty_count(), 0);
        }
        assert!(loaded > 0);
        let center = ChunkCoord::from_world_pos(session.player.position);
        assert!(center.x > 0);
        for coord in session.world.loaded_coords() {
            assert!(coord.chebyshev_distance(&center) <= CHUNK_UNLOAD_DISTANCE);
        }
        assert_eq!(
            session.world.geometry().live_buffers(),
            session.world.chunk_count()
        );
    }

    #[test]
    fn test_break_intent_remeshes_same_tick() {
        let mut session = session();
        session.tick(&InputState::default(), 0.016);

        let dig = InputState {
            look_delta: glam::Vec2::new(0.0, -std::f32::consts::FRAC_PI_2),
            intent: Some(BlockIntent::Break),
            ..Default::default()
        };
        let report = session.tick(&dig, 0.016);
        assert_eq!(report.edited, Some(IVec3::new(8, GROUND_HEIGHT, 8)));
        assert_eq!(report.rebuilt, 1);
        assert_eq!(session.world.get_block(8, GROUND_HEIGHT, 8), BlockType::Air);
    }

    #[test]
    fn test_render_after_tick() {
        let mut session = session();
        session.tick(&InputState::default(), 0.016);
        let mut calls: Vec<DrawCall> = Vec::new();
        session.render(&mut calls);
        assert_eq!(calls.len(), session.world.chunk_count());
        assert!(calls.iter().all(|c| c.vertex_count > 0));
    }
}
