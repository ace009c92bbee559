//! Boundary between chunk meshes and whatever owns GPU buffers.
//!
//! The world never talks to a graphics API directly: it hands finished vertex
//! lists to a [`GeometryBackend`] and keeps the returned [`MeshHandle`], then
//! emits [`DrawCall`]s to a [`ChunkRenderer`] each frame.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::core::coords::ChunkCoord;
use crate::core::vertex::Vertex;

/// Opaque identifier of uploaded chunk geometry (a vertex buffer name).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MeshHandle(pub u32);

pub trait GeometryBackend {
    fn upload(&mut self, vertices: &[Vertex]) -> MeshHandle;
    fn release(&mut self, handle: MeshHandle);
}

/// One chunk's worth of drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub coord: ChunkCoord,
    pub handle: MeshHandle,
    pub vertex_count: u32,
    pub translation: Vec3,
}

pub trait ChunkRenderer {
    fn draw(&mut self, call: DrawCall);
}

impl ChunkRenderer for Vec<DrawCall> {
    fn draw(&mut self, call: DrawCall) {
        self.push(call);
    }
}

/// Keeps uploaded vertices in memory. Used headless and in tests.
#[derive(Default)]
pub struct HeadlessGeometry {
    buffers: FxHashMap<MeshHandle, Vec<Vertex>>,
    next_id: u32,
    uploads: usize,
    releases: usize,
}

impl HeadlessGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self, handle: MeshHandle) -> Option<&[Vertex]> {
        self.buffers.get(&handle).map(|v| v.as_slice())
    }

    pub fn live_buffers(&self) -> usize {
        self.buffers.len()
    }

    pub fn uploads(&self) -> usize {
        self.uploads
    }

    pub fn releases(&self) -> usize {
        self.releases
    }
}

impl GeometryBackend for HeadlessGeometry {
    fn upload(&mut self, vertices: &[Vertex]) -> MeshHandle {
        self.next_id += 1;
        let handle = MeshHandle(self.next_id);
        self.buffers.insert(handle, vertices.to_vec());
        self.uploads += 1;
        handle
    }

    fn release(&mut self, handle: MeshHandle) {
        let released = self.buffers.remove(&handle);
        debug_assert!(released.is_some(), "double release of {:?}", handle);
        self.releases += 1;
    }
}
