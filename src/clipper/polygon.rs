//! Bounded convex polygons and the single-plane Sutherland-Hodgman step.

use super::frustum::Plane;
use crate::math::vec3::Vec3;
use crate::texture::TexCoord;

/// Upper bound on polygon size.
///
/// A triangle clipped against one convex plane gains at most one vertex, so
/// six frustum planes take it from 3 to at most 9.
pub const MAX_POLYGON_VERTICES: usize = 9;

/// Upper bound on the fan produced from one clipped triangle.
pub const MAX_POLYGON_TRIANGLES: usize = MAX_POLYGON_VERTICES - 2;

/// A vertex with all attributes needed for clipping interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipVertex {
    pub position: Vec3,
    pub texcoord: TexCoord,
}

impl ClipVertex {
    pub const fn new(position: Vec3, texcoord: TexCoord) -> Self {
        Self { position, texcoord }
    }

    /// Interpolates position and texture coordinate with the same `t`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            texcoord: self.texcoord.lerp(other.texcoord, t),
        }
    }
}

/// A convex polygon stored inline, at most [`MAX_POLYGON_VERTICES`] long.
///
/// Built from a triangle, reduced by one [`Polygon::clip_against_plane`] per
/// frustum plane and turned back into triangles by [`Polygon::triangulate`].
#[derive(Clone, Copy, Debug)]
pub struct Polygon {
    vertices: [ClipVertex; MAX_POLYGON_VERTICES],
    len: usize,
}

impl Polygon {
    const fn empty() -> Self {
        Self {
            vertices: [ClipVertex::new(Vec3::ZERO, TexCoord::new(0.0, 0.0)); MAX_POLYGON_VERTICES],
            len: 0,
        }
    }

    /// Create a polygon from a triangle. Vertex order is kept and defines
    /// the winding of the triangle fan.
    pub fn from_triangle(v0: ClipVertex, v1: ClipVertex, v2: ClipVertex) -> Self {
        let mut polygon = Self::empty();
        polygon.push(v0);
        polygon.push(v1);
        polygon.push(v2);
        polygon
    }

    #[inline]
    fn push(&mut self, vertex: ClipVertex) {
        assert!(
            self.len < MAX_POLYGON_VERTICES,
            "polygon exceeded {MAX_POLYGON_VERTICES} vertices"
        );
        self.vertices[self.len] = vertex;
        self.len += 1;
    }

    pub fn vertices(&self) -> &[ClipVertex] {
        &self.vertices[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is left to triangulate.
    pub fn is_empty(&self) -> bool {
        self.len < 3
    }

    /// Clip against a single plane, keeping the part on the normal's side.
    ///
    /// Vertices are walked as (previous, current) pairs starting from
    /// (last, first). An edge whose endpoints have strictly opposite signed
    /// distances emits the interpolated crossing; a current vertex with a
    /// non-negative distance is emitted as-is. Vertices lying exactly on the
    /// plane are kept and never duplicated.
    pub fn clip_against_plane(&self, plane: &Plane) -> Self {
        let mut output = Self::empty();
        let vertices = self.vertices();

        let Some(last) = vertices.last() else {
            return output;
        };

        let mut previous = last;
        let mut previous_distance = plane.signed_distance(previous.position);

        for current in vertices {
            let current_distance = plane.signed_distance(current.position);

            if previous_distance * current_distance < 0.0 {
                let t = previous_distance / (previous_distance - current_distance);
                output.push(previous.lerp(current, t));
            }

            if current_distance >= 0.0 {
                output.push(*current);
            }

            previous = current;
            previous_distance = current_distance;
        }

        output
    }

    /// Triangulate this convex polygon as a fan around vertex 0.
    ///
    /// Triangle `i` is `(0, i + 1, i + 2)`; fewer than three vertices yield
    /// nothing.
    pub fn triangulate(&self) -> impl Iterator<Item = [ClipVertex; 3]> + '_ {
        let vertices = self.vertices();
        (1..vertices.len().saturating_sub(1))
            .map(move |i| [vertices[0], vertices[i], vertices[i + 1]])
    }
}
