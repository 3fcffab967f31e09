//! Engine configuration.

use crate::error::ConfigError;
use crate::math::vec3::Vec3;
use crate::projection::Projection;

/// Which faces the pipeline discards before clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Keep every face regardless of orientation.
    None,
    /// Drop faces whose normal points away from the camera.
    #[default]
    Backface,
}

/// Parameters for [`crate::Engine::new`].
///
/// ```ignore
/// let config = EngineConfig {
///     width: 1280,
///     height: 720,
///     ..EngineConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Viewport size in pixels.
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub cull_mode: CullMode,
    /// Direction the light travels, in camera space.
    pub light_direction: Vec3,
    /// Triangles kept per frame; anything beyond is dropped.
    pub max_triangles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov_y_degrees: 60.0,
            z_near: 0.1,
            z_far: 100.0,
            cull_mode: CullMode::default(),
            light_direction: Vec3::FORWARD,
            max_triangles: 10_000,
        }
    }
}

impl EngineConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Builds the projection described by this configuration.
    pub fn projection(&self) -> Result<Projection, ConfigError> {
        Projection::from_degrees(self.fov_y_degrees, self.aspect_ratio(), self.z_near, self.z_far)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Viewport {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_triangles == 0 {
            return Err(ConfigError::TriangleBudget);
        }
        if self.light_direction.magnitude() == 0.0 {
            return Err(ConfigError::LightDirection);
        }
        self.projection().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let config = EngineConfig {
            height: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Viewport {
                width: 800,
                height: 0
            })
        );
    }

    #[test]
    fn projection_errors_surface_through_validate() {
        let config = EngineConfig {
            z_near: 5.0,
            z_far: 1.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DepthRange { .. })
        ));

        let config = EngineConfig {
            fov_y_degrees: 200.0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::FieldOfView(_))));
    }

    #[test]
    fn zero_light_and_budget_are_rejected() {
        let config = EngineConfig {
            light_direction: Vec3::ZERO,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::LightDirection));

        let config = EngineConfig {
            max_triangles: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TriangleBudget));
    }
}
