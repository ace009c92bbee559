use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

use crate::constants::*;
use crate::world::generator::LayeredGenerator;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings codec error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("Unload distance {unload} must exceed render distance {render}")]
    InvalidDistances { render: i32, unload: i32 },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorldSettings {
    pub render_distance: i32,
    pub unload_distance: i32,
    /// Upper bound on chunks created per streaming pass; `None` loads the
    /// whole missing radius at once.
    #[serde(default)]
    pub max_loads_per_tick: Option<usize>,
    #[serde(default)]
    pub terrain: TerrainSettings,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            render_distance: RENDER_DISTANCE,
            unload_distance: CHUNK_UNLOAD_DISTANCE,
            max_loads_per_tick: None,
            terrain: TerrainSettings::default(),
        }
    }
}

impl WorldSettings {
    /// Rejects radii that would unload chunks still inside the render radius.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.render_distance < 0 || self.unload_distance <= self.render_distance {
            return Err(SettingsError::InvalidDistances {
                render: self.render_distance,
                unload: self.unload_distance,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TerrainKind {
    Flat,
    Noise,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TerrainSettings {
    pub kind: TerrainKind,
    pub seed: u32,
    pub ground_height: i32,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            kind: TerrainKind::Flat,
            seed: 2137,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl TerrainSettings {
    pub fn build_generator(&self) -> LayeredGenerator {
        match self.kind {
            TerrainKind::Flat => LayeredGenerator::flat(self.ground_height),
            TerrainKind::Noise => LayeredGenerator::noise(self.seed, self.ground_height),
        }
    }
}

pub fn save_settings(path: &Path, settings: &WorldSettings) -> Result<(), SettingsError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, settings)?;
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<WorldSettings, SettingsError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let settings: WorldSettings = bincode::deserialize_from(&mut reader)?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("chunkworld-{}-{}.bin", name, std::process::id()))
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = WorldSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.render_distance, 3);
        assert_eq!(settings.unload_distance, 4);
    }

    #[test]
    fn test_invalid_distances_rejected() {
        let settings = WorldSettings {
            render_distance: 4,
            unload_distance: 4,
            ..Default::default()
        };
        match settings.validate() {
            Err(SettingsError::InvalidDistances { render, unload }) => {
                assert_eq!(render, 4);
                assert_eq!(unload, 4);
            }
            other => panic!("expected InvalidDistances, got {:?}", other),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("round-trip");
        let settings = WorldSettings {
            render_distance: 5,
            unload_distance: 7,
            max_loads_per_tick: Some(4),
            terrain: TerrainSettings {
                kind: TerrainKind::Noise,
                seed: 42,
                ground_height: 70,
            },
        };

        save_settings(&path, &settings).unwrap();
        let loaded = load_settings(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_rejects_invalid_file_contents() {
        let path = temp_path("invalid");
        let settings = WorldSettings {
            render_distance: 6,
            unload_distance: 2,
            ..Default::default()
        };
        save_settings(&path, &settings).unwrap();
        let result = load_settings(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(SettingsError::InvalidDistances { .. })));
    }

    #[test]
    fn test_noise_terrain_follows_ground_height() {
        let low = TerrainSettings {
            kind: TerrainKind::Noise,
            seed: 5,
            ground_height: 20,
        }
        .build_generator();
        let high = TerrainSettings {
            kind: TerrainKind::Noise,
            seed: 5,
            ground_height: 200,
        }
        .build_generator();

        for (x, z) in [(3, 3), (-40, 17), (100, -250)] {
            let a = low.surface_height(x, z);
            let b = high.surface_height(x, z);
            assert!(a < 40, "low terrain at ({}, {}) is {}", x, z, a);
            assert!(b > 180, "high terrain at ({}, {}) is {}", x, z, b);
        }
    }

    #[test]
    fn test_flat_terrain_uses_ground_height() {
        let generator = TerrainSettings {
            kind: TerrainKind::Flat,
            seed: 0,
            ground_height: 70,
        }
        .build_generator();
        assert_eq!(generator.surface_height(-9, 12), 70);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_settings(&temp_path("does-not-exist"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
