use glam::{IVec3, Vec3};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        let half = size / 2.0;
        Aabb {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Aabb { min, max }
    }

    /// Unit cube occupied by the block at `cell`.
    pub fn block(cell: IVec3) -> Self {
        let min = cell.as_vec3();
        Aabb {
            min,
            max: min + Vec3::ONE,
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Touching boxes count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Integer cells overlapped by this box, as half-open ranges
    /// `floor(min)..ceil(max)` per axis.
    pub fn cell_range(&self) -> (IVec3, IVec3) {
        (self.min.floor().as_ivec3(), self.max.ceil().as_ivec3())
    }
}
