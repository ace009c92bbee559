//! Player-related modules
//! Contains the look camera, input snapshot, body physics, and block interaction.

pub mod body;
pub mod camera;
pub mod input;
pub mod interaction;

// Re-export commonly used types
pub use body::Body;
pub use camera::Camera;
pub use input::{BlockIntent, InputState};
pub use interaction::{apply_intent, target_block};
