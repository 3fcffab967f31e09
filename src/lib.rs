//! The geometry stage of a CPU software rasterizer.
//!
//! Meshes are transformed into camera space, back faces are culled, and every
//! surviving triangle is clipped against the six planes of the view frustum.
//! Clipped polygons are fanned back into triangles and projected to screen
//! space, ready for a rasterizer.
//!
//! # Quick Start
//!
//! ```no_run
//! use softpipe::prelude::*;
//!
//! let mut engine = Engine::new(EngineConfig::default())?;
//! engine.update();
//! for triangle in engine.triangles() {
//!     // hand off to a rasterizer
//!     let _ = triangle.points;
//! }
//! # Ok::<(), softpipe::Error>(())
//! ```

pub mod camera;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod texture;
pub mod transform;
pub mod triangle;

// Re-export commonly needed types at crate root for convenience
pub use config::{CullMode, EngineConfig};
pub use engine::{Engine, FrameStats};
pub use error::{ConfigError, Error, LoadError, Result};
pub use mesh::Mesh;
pub use projection::Projection;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use softpipe::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::Mesh;
    pub use crate::transform::Transform;

    // Pipeline
    pub use crate::clipper::{ClipVertex, Frustum, FrustumPlane, Plane, Polygon};
    pub use crate::config::{CullMode, EngineConfig};
    pub use crate::engine::{Engine, FrameStats};
    pub use crate::projection::Projection;
    pub use crate::triangle::{Face, Triangle};

    // Math
    pub use crate::math::{Mat4, Vec2, Vec3, Vec4};
    pub use crate::texture::TexCoord;
}
