use glam::Vec2;

use crate::core::block::BlockType;

/// Block edit requested for this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockIntent {
    Break,
    Place(BlockType),
}

/// Per-tick input snapshot handed to the session by the windowing layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Yaw and pitch change in radians.
    pub look_delta: Vec2,
    pub intent: Option<BlockIntent>,
}

impl InputState {
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
