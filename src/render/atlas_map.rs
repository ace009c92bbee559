use glam::Vec2;

use crate::constants::ATLAS_SIZE;
use crate::core::block::BlockType;

/// Cube faces in the order the mesher visits them; the discriminant is the
/// face index handed to the atlas lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    East = 2,
    West = 3,
    South = 4,
    North = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::East,
        Face::West,
        Face::South,
        Face::North,
    ];

    /// Offset to the cell this face looks at.
    pub fn normal(&self) -> [i32; 3] {
        match self {
            Face::Top => [0, 1, 0],
            Face::Bottom => [0, -1, 0],
            Face::East => [1, 0, 0],
            Face::West => [-1, 0, 0],
            Face::South => [0, 0, 1],
            Face::North => [0, 0, -1],
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Texture-atlas collaborator: where a block face's tile starts, and how big
/// one tile is in UV space.
pub trait TextureAtlas {
    fn lookup_uv(&self, block: BlockType, face: Face) -> Vec2;
    fn tile_size(&self) -> f32;
}

/// Square atlas of `tiles_per_row x tiles_per_row` equally sized tiles,
/// addressed by the block's tile index in row-major order.
#[derive(Clone, Copy, Debug)]
pub struct GridAtlas {
    tiles_per_row: u32,
}

impl GridAtlas {
    pub fn new(tiles_per_row: u32) -> Self {
        GridAtlas {
            tiles_per_row: tiles_per_row.max(1),
        }
    }

    pub fn tile_origin(&self, tile: u32) -> Vec2 {
        let step = self.tile_size();
        Vec2::new(
            (tile % self.tiles_per_row) as f32 * step,
            (tile / self.tiles_per_row) as f32 * step,
        )
    }
}

impl Default for GridAtlas {
    fn default() -> Self {
        Self::new(ATLAS_SIZE)
    }
}

impl TextureAtlas for GridAtlas {
    fn lookup_uv(&self, block: BlockType, face: Face) -> Vec2 {
        let tile = match face {
            Face::Top => block.tex_top(),
            Face::Bottom => block.tex_bottom(),
            _ => block.tex_side(),
        };
        self.tile_origin(tile)
    }

    fn tile_size(&self) -> f32 {
        1.0 / self.tiles_per_row as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_atlas_layout() {
        let atlas = GridAtlas::default();
        assert_eq!(atlas.tile_size(), 0.5);
        assert_eq!(atlas.lookup_uv(BlockType::Grass, Face::Top), Vec2::new(0.5, 0.0));
        assert_eq!(atlas.lookup_uv(BlockType::Grass, Face::Bottom), Vec2::new(0.0, 0.0));
        assert_eq!(atlas.lookup_uv(BlockType::Grass, Face::North), Vec2::new(0.0, 0.5));
        assert_eq!(atlas.lookup_uv(BlockType::Dirt, Face::East), Vec2::new(0.0, 0.0));
        assert_eq!(atlas.lookup_uv(BlockType::Stone, Face::Top), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_face_indices_match_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            let n = face.normal();
            assert_eq!(n.iter().map(|c| c.abs()).sum::<i32>(), 1);
        }
    }
}
