//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for all perspective
//! projection parameters (FOV, aspect ratio, near/far planes). It generates
//! both the projection matrix and the view-space frustum used for clipping,
//! so the two can never disagree.

use std::f32::consts::PI;

use crate::clipper::Frustum;
use crate::error::ConfigError;
use crate::math::mat4::Mat4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians, in (0, pi)
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Result<Self, ConfigError> {
        if !(fov_y > 0.0 && fov_y < PI) {
            return Err(ConfigError::FieldOfView(fov_y));
        }
        validate_aspect(aspect_ratio)?;
        if !(z_near > 0.0 && z_far > z_near && z_far.is_finite()) {
            return Err(ConfigError::DepthRange {
                near: z_near,
                far: z_far,
            });
        }

        Ok(Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        })
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(
        fov_y_degrees: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, ConfigError> {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Horizontal field of view in radians.
    ///
    /// `tan(fov_x / 2) = aspect * tan(fov_y / 2)`
    pub fn fov_x(&self) -> f32 {
        2.0 * (self.aspect_ratio * (self.fov_y / 2.0).tan()).atan()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<(), ConfigError> {
        validate_aspect(aspect_ratio)?;
        self.aspect_ratio = aspect_ratio;
        Ok(())
    }

    /// Generates the left-handed perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }

    /// Builds the view-space frustum matching this projection.
    pub fn frustum(&self) -> Frustum {
        Frustum::new(self.fov_x(), self.fov_y, self.z_near, self.z_far)
    }
}

fn validate_aspect(aspect_ratio: f32) -> Result<(), ConfigError> {
    if aspect_ratio > 0.0 && aspect_ratio.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::AspectRatio(aspect_ratio))
    }
}
