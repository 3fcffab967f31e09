//! View-space frustum planes.
//!
//! All planes live in camera space: apex at the origin, looking down +Z. Each
//! normal points toward the inside of the frustum.
//!
//! ```text
//!           /|\
//!         /  | |
//!       /\   | |
//!     /      | |
//!  P*|-->  <-|*|   ----> +z
//!     \      | |
//!       \/   | |
//!         \  | |
//!           \|/
//! ```

use super::polygon::{ClipVertex, Polygon};
use crate::math::vec3::Vec3;

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the "inside" (visible) half-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub const fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Positive = inside (same side as normal), Negative = outside.
    #[inline]
    pub fn signed_distance(&self, position: Vec3) -> f32 {
        (position - self.point).dot(self.normal)
    }
}

/// Identifies one of the six frustum planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    Left,
    Right,
    Top,
    Bottom,
    Near,
    Far,
}

impl FrustumPlane {
    /// Order in which [`Frustum::clip_polygon`] visits the planes.
    pub const CLIP_ORDER: [FrustumPlane; 6] = [
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Top,
        FrustumPlane::Bottom,
        FrustumPlane::Far,
        FrustumPlane::Near,
    ];

    const fn index(self) -> usize {
        match self {
            FrustumPlane::Left => 0,
            FrustumPlane::Right => 1,
            FrustumPlane::Top => 2,
            FrustumPlane::Bottom => 3,
            FrustumPlane::Near => 4,
            FrustumPlane::Far => 5,
        }
    }
}

/// View-space frustum defined by 6 clipping planes.
///
/// Built from the projection parameters and owned by whoever drives the
/// pipeline. It must be rebuilt whenever the field of view or the depth range
/// changes; see [`crate::Projection::frustum`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Creates a symmetric frustum.
    ///
    /// # Arguments
    /// * `fov_x` - Horizontal field of view in radians
    /// * `fov_y` - Vertical field of view in radians
    /// * `z_near` - Near clipping plane distance
    /// * `z_far` - Far clipping plane distance
    pub fn new(fov_x: f32, fov_y: f32, z_near: f32, z_far: f32) -> Self {
        let (sin_half_x, cos_half_x) = (fov_x / 2.0).sin_cos();
        let (sin_half_y, cos_half_y) = (fov_y / 2.0).sin_cos();
        let origin = Vec3::ZERO;

        let mut planes = [Plane::new(origin, Vec3::FORWARD); 6];
        planes[FrustumPlane::Left.index()] =
            Plane::new(origin, Vec3::new(cos_half_x, 0.0, sin_half_x));
        planes[FrustumPlane::Right.index()] =
            Plane::new(origin, Vec3::new(-cos_half_x, 0.0, sin_half_x));
        planes[FrustumPlane::Top.index()] =
            Plane::new(origin, Vec3::new(0.0, -cos_half_y, sin_half_y));
        planes[FrustumPlane::Bottom.index()] =
            Plane::new(origin, Vec3::new(0.0, cos_half_y, sin_half_y));
        planes[FrustumPlane::Near.index()] =
            Plane::new(Vec3::new(0.0, 0.0, z_near), Vec3::new(0.0, 0.0, 1.0));
        planes[FrustumPlane::Far.index()] =
            Plane::new(Vec3::new(0.0, 0.0, z_far), Vec3::new(0.0, 0.0, -1.0));

        tracing::debug!(fov_x, fov_y, z_near, z_far, "built view frustum");

        Self { planes }
    }

    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which.index()]
    }

    /// Clip a polygon against every plane in [`FrustumPlane::CLIP_ORDER`].
    /// Returns the clipped polygon, which may be empty if fully outside.
    pub fn clip_polygon(&self, polygon: Polygon) -> Polygon {
        FrustumPlane::CLIP_ORDER
            .iter()
            .fold(polygon, |result, &which| {
                result.clip_against_plane(self.plane(which))
            })
    }

    /// Builds a polygon from a view-space triangle and clips it.
    pub fn clip_triangle(&self, v0: ClipVertex, v1: ClipVertex, v2: ClipVertex) -> Polygon {
        self.clip_polygon(Polygon::from_triangle(v0, v1, v2))
    }

    /// True if `position` lies on or inside every plane.
    pub fn contains(&self, position: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(position) >= 0.0)
    }
}
