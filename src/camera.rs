//! First-person camera
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch angles; the look direction is derived
//! from them on demand.
//!
//! - **Yaw**: Rotation around Y-axis (horizontal look, positive = look right)
//! - **Pitch**: Rotation around X-axis (vertical look, positive = look down)

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    pitch_limit: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at the given position, looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            pitch_limit: 89.0_f32.to_radians(),
        }
    }

    /// Positive values rotate right, negative values rotate left.
    pub fn rotate_yaw(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(std::f32::consts::TAU);
    }

    /// Positive values look down. Clamped short of straight up/down so the
    /// view basis never degenerates.
    pub fn rotate_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Moves the camera along its look direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.direction() * distance;
    }

    /// Moves the camera along the world up axis.
    pub fn move_up(&mut self, distance: f32) {
        self.position.y += distance;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit look direction: +Z pitched around X, then yawed around Y.
    pub fn direction(&self) -> Vec3 {
        Vec3::FORWARD.rotate_x(self.pitch).rotate_y(self.yaw)
    }

    /// Transforms world space into camera space (camera at the origin,
    /// looking down +Z).
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.direction();
        Mat4::look_at_lh(self.position, target, Vec3::UP)
    }
}
