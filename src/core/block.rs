use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Air,
    Grass,
    Dirt,
    Stone,
}

impl BlockType {
    pub const ALL: [BlockType; 4] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
    ];

    /// Every non-Air block occupies its whole cell, for meshing, collision and raycasts alike.
    pub fn is_solid(&self) -> bool {
        *self != BlockType::Air
    }

    pub fn is_air(&self) -> bool {
        *self == BlockType::Air
    }

    pub fn tex_top(&self) -> u32 {
        match self {
            BlockType::Air => 0,
            BlockType::Grass => TEX_GRASS_TOP,
            BlockType::Dirt => TEX_DIRT,
            BlockType::Stone => TEX_STONE,
        }
    }

    pub fn tex_side(&self) -> u32 {
        match self {
            BlockType::Grass => TEX_GRASS_SIDE,
            _ => self.tex_top(),
        }
    }

    pub fn tex_bottom(&self) -> u32 {
        match self {
            BlockType::Grass => TEX_DIRT,
            _ => self.tex_top(),
        }
    }
}
