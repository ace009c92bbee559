//! Distance-based chunk streaming around an observer.

use glam::Vec3;

use crate::core::coords::ChunkCoord;
use crate::render::geometry::GeometryBackend;
use crate::world::terrain::World;

/// What one streaming pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamingReport {
    pub loaded: usize,
    pub unloaded: usize,
}

impl StreamingReport {
    pub fn is_empty(&self) -> bool {
        self.loaded == 0 && self.unloaded == 0
    }
}

impl<G: GeometryBackend> World<G> {
    /// Unloads chunks farther than the unload distance from the observer and
    /// creates the missing ones within the render distance, nearest first.
    pub fn update_chunks_around_player(&mut self, position: Vec3) -> StreamingReport {
        let center = ChunkCoord::from_world_pos(position);
        let render_distance = self.settings.render_distance;
        let unload_distance = self.settings.unload_distance;

        let chunks_to_remove: Vec<ChunkCoord> = self
            .loaded_coords()
            .filter(|coord| coord.chebyshev_distance(&center) > unload_distance)
            .collect();

        let mut report = StreamingReport::default();
        for coord in chunks_to_remove {
            if self.unload_chunk(coord) {
                report.unloaded += 1;
            }
        }

        let mut missing: Vec<ChunkCoord> = Vec::new();
        for cx in (center.x - render_distance)..=(center.x + render_distance) {
            for cz in (center.z - render_distance)..=(center.z + render_distance) {
                let coord = ChunkCoord::new(cx, cz);
                if !self.is_loaded(coord) {
                    missing.push(coord);
                }
            }
        }
        missing.sort_by_key(|coord| (coord.distance_squared(&center), *coord));
        if let Some(limit) = self.settings.max_loads_per_tick {
            missing.truncate(limit);
        }

        for coord in missing {
            self.create_chunk(coord);
            self.mark_neighbors_dirty(coord);
            report.loaded += 1;
        }

        if !report.is_empty() {
            tracing::info!(
                "Streaming around chunk ({}, {}): loaded {}, unloaded {}, {} resident",
                center.x,
                center.z,
                report.loaded,
                report.unloaded,
                self.chunk_count()
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::HeadlessGeometry;
    use crate::utils::settings::WorldSettings;

    fn world_with(render_distance: i32, unload_distance: i32, max_loads: Option<usize>) -> World {
        let settings = WorldSettings {
            render_distance,
            unload_distance,
            max_loads_per_tick: max_loads,
            ..Default::default()
        };
        World::with_settings(settings, HeadlessGeometry::new()).unwrap()
    }

    #[test]
    fn test_loads_exact_square_around_origin() {
        let mut world = world_with(2, 3, None);
        let report = world.update_chunks_around_player(Vec3::new(8.0, 70.0, 8.0));
        assert_eq!(report.loaded, 25);
        assert_eq!(report.unloaded, 0);
        assert_eq!(world.chunk_count(), 25);
        for x in -2..=2 {
            for z in -2..=2 {
                assert!(world.is_loaded(ChunkCoord::new(x, z)));
            }
        }
        assert!(!world.is_loaded(ChunkCoord::new(3, 0)));
    }

    #[test]
    fn test_negative_position_uses_floor() {
        let mut world = world_with(0, 1, None);
        world.update_chunks_around_player(Vec3::new(-0.5, 70.0, -16.5));
        assert!(world.is_loaded(ChunkCoord::new(-1, -2)));
        assert_eq!(world.chunk_count(), 1);
    }

    #[test]
    fn test_moving_away_unloads_beyond_distance() {
        let mut world = world_with(2, 3, None);
        world.update_chunks_around_player(Vec3::new(0.0, 70.0, 0.0));
        world.update();

        let report = world.update_chunks_around_player(Vec3::new(16.0 * 10.0, 70.0, 0.0));
        assert_eq!(report.unloaded, 25);
        assert_eq!(report.loaded, 25);
        for coord in world.loaded_coords() {
            assert!(coord.chebyshev_distance(&ChunkCoord::new(10, 0)) <= 3);
        }
        world.update();
        assert_eq!(world.geometry().live_buffers(), world.chunk_count());
    }

    #[test]
    fn test_hysteresis_keeps_chunks_between_radii() {
        let mut world = world_with(1, 3, None);
        world.update_chunks_around_player(Vec3::new(0.0, 70.0, 0.0));
        let report = world.update_chunks_around_player(Vec3::new(16.0 * 2.0, 70.0, 0.0));
        assert_eq!(report.unloaded, 0);
        assert!(world.is_loaded(ChunkCoord::new(-1, 0)));
        assert_eq!(world.chunk_count(), 9 + 6);
    }

    #[test]
    fn test_loading_marks_neighbors_dirty() {
        let mut world = world_with(0, 2, None);
        world.update_chunks_around_player(Vec3::new(0.0, 70.0, 0.0));
        world.update();
        assert_eq!(world.dirty_count(), 0);

        world.update_chunks_around_player(Vec3::new(16.0, 70.0, 0.0));
        assert!(world.chunk(ChunkCoord::new(0, 0)).unwrap().is_dirty());
        assert_eq!(world.update(), 2);

        // The shared wall between the two chunks is culled on both sides.
        let left = world.chunk(ChunkCoord::new(0, 0)).unwrap().vertex_count();
        let right = world.chunk(ChunkCoord::new(1, 0)).unwrap().vertex_count();
        assert_eq!(left, right);
    }

    #[test]
    fn test_unloading_marks_neighbors_dirty() {
        let mut world = world_with(0, 1, None);
        world.update_chunks_around_player(Vec3::new(0.0, 70.0, 0.0));
        world.update_chunks_around_player(Vec3::new(16.0, 70.0, 0.0));
        world.update();
        let before = world.chunk(ChunkCoord::new(1, 0)).unwrap().vertex_count();

        world.settings.unload_distance = 0;
        let report = world.update_chunks_around_player(Vec3::new(16.0, 70.0, 0.0));
        assert_eq!(report, StreamingReport { loaded: 0, unloaded: 1 });
        assert!(!world.is_loaded(ChunkCoord::new(0, 0)));
        assert!(world.chunk(ChunkCoord::new(1, 0)).unwrap().is_dirty());

        // The west wall of chunk 1 is exposed again.
        world.update();
        let after = world.chunk(ChunkCoord::new(1, 0)).unwrap().vertex_count();
        assert_eq!(after - before, 16 * 65 * 6);
    }

    #[test]
    fn test_load_cap_prefers_nearest() {
        let mut world = world_with(2, 3, Some(5));
        let report = world.update_chunks_around_player(Vec3::new(0.0, 70.0, 0.0));
        assert_eq!(report.loaded, 5);
        assert!(world.is_loaded(ChunkCoord::new(0, 0)));
        for coord in world.loaded_coords() {
            assert!(coord.distance_squared(&ChunkCoord::new(0, 0)) <= 1);
        }

        let mut passes = 1;
        while !world.update_chunks_around_player(Vec3::new(0.0, 70.0, 0.0)).is_empty() {
            passes += 1;
        }
        assert_eq!(world.chunk_count(), 25);
        assert_eq!(passes, 5);
    }
}
