//! Utility modules
//! Contains runtime world settings and their persistence.

pub mod settings;

// Re-export commonly used types
pub use settings::{SettingsError, TerrainKind, TerrainSettings, WorldSettings, load_settings, save_settings};
