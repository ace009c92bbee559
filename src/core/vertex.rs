use bytemuck::{Pod, Zeroable};

/// One corner of a chunk mesh triangle, laid out for direct upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Chunk-local position, integer aligned.
    pub position: [f32; 3],
    /// Atlas texture coordinate.
    pub uv: [f32; 2],
}

impl Vertex {
    pub const FLOATS: usize = 5;

    pub fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Vertex { position, uv }
    }
}
