//! Polygon clipping against the view frustum.
//!
//! Triangles are clipped in view space, before projection, using the
//! Sutherland-Hodgman algorithm:
//!
//! - [`frustum`]: the six planes derived from the field of view and depth
//!   range.
//! - [`polygon`]: the bounded polygon, the single-plane clip step and the fan
//!   triangulation back into triangles.

pub mod frustum;
pub mod polygon;

pub use frustum::{Frustum, FrustumPlane, Plane};
pub use polygon::{ClipVertex, Polygon, MAX_POLYGON_TRIANGLES, MAX_POLYGON_VERTICES};
