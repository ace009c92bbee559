use glam::Vec3;

const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Observer look angles in radians. Yaw 0 faces +X, positive pitch looks up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut camera = Camera { yaw, pitch: 0.0 };
        camera.rotate(0.0, pitch);
        camera
    }

    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, self.yaw.cos()).normalize()
    }

    pub fn look_direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }
}
