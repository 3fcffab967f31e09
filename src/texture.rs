//! Texture coordinates carried through the pipeline.
//!
//! Texel storage and sampling belong to the rasterizer; the geometry stages
//! only need to keep a (u, v) pair attached to every vertex, including the
//! ones introduced by clipping.

use crate::math::vec2::Vec2;

/// A (u, v) texture coordinate in OBJ convention (origin bottom-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TexCoord {
    pub u: f32,
    pub v: f32,
}

impl TexCoord {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    /// Linearly interpolate from `self` toward `other` by `t`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(self.u + t * (other.u - self.u), self.v + t * (other.v - self.v))
    }
}

impl From<Vec2> for TexCoord {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<TexCoord> for Vec2 {
    fn from(t: TexCoord) -> Self {
        Vec2::new(t.u, t.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = TexCoord::new(0.0, 1.0);
        let b = TexCoord::new(1.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.u, 0.5);
        assert_relative_eq!(mid.v, 0.5);
    }

    #[test]
    fn converts_to_and_from_vec2() {
        let uv = TexCoord::from(Vec2::new(0.25, 0.75));
        assert_eq!(uv, TexCoord::new(0.25, 0.75));
        assert_eq!(Vec2::from(uv), Vec2::new(0.25, 0.75));
    }
}
