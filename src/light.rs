//! Flat-shading light source.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// All rays are parallel, so a face's intensity depends only on its normal.
/// The direction is interpreted in camera space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction is normalized and must not be zero.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Lambertian factor for flat shading, in [0.0, 1.0].
    pub fn intensity(&self, normal: Vec3) -> f32 {
        // Negate direction: light pointing at surface = positive dot product
        (-self.direction).dot(normal.normalize()).clamp(0.0, 1.0)
    }
}

impl Default for DirectionalLight {
    /// Points into the screen, lighting faces that look at the camera.
    fn default() -> Self {
        Self::new(Vec3::FORWARD)
    }
}
