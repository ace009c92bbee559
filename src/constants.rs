// World constants
pub const CHUNK_WIDTH: i32 = 16;
pub const CHUNK_HEIGHT: i32 = 256;
pub const CHUNK_DEPTH: i32 = 16;
pub const CHUNK_VOLUME: usize = (CHUNK_WIDTH * CHUNK_HEIGHT * CHUNK_DEPTH) as usize;
pub const RENDER_DISTANCE: i32 = 3;
pub const CHUNK_UNLOAD_DISTANCE: i32 = 4;
pub const GROUND_HEIGHT: i32 = 64;

//indexes of textures in atlas
pub const TEX_DIRT: u32 = 0;
pub const TEX_GRASS_TOP: u32 = 1;
pub const TEX_GRASS_SIDE: u32 = 2;
pub const TEX_STONE: u32 = 3;
pub const ATLAS_SIZE: u32 = 2;

// Meshing constants
pub const VERTICES_PER_FACE: usize = 6;

// Physics constants
pub const GRAVITY: f32 = 30.0;
pub const TERMINAL_VELOCITY: f32 = 50.0;
pub const SKIN_WIDTH: f32 = 0.005;
pub const MAX_STEP_DISPLACEMENT: f32 = 0.5;

// Player constants
pub const PLAYER_HEIGHT: f32 = 1.8;
pub const PLAYER_WIDTH: f32 = 0.35; // half extent on X and Z
pub const PLAYER_EYE_HEIGHT: f32 = 1.62;
pub const PLAYER_BASE_SPEED: f32 = 10.0;
pub const PLAYER_JUMP_VELOCITY: f32 = 10.0;
pub const PLAYER_REACH: f32 = 5.0;
