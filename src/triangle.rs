use crate::colors;
use crate::math::vec4::Vec4;
use crate::texture::TexCoord;

/// A triangle of a mesh, referencing three entries of its vertex array.
///
/// Indices are zero-based. Texture coordinates are stored per corner since
/// OBJ files may share a position between corners with different UVs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub texcoords: [TexCoord; 3],
    pub color: u32,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize, texcoords: [TexCoord; 3], color: u32) -> Self {
        Self {
            a,
            b,
            c,
            texcoords,
            color,
        }
    }

    /// A face without texture coordinates, filled with [`colors::FILL`].
    pub const fn untextured(a: usize, b: usize, c: usize) -> Self {
        Self::new(a, b, c, [TexCoord::new(0.0, 0.0); 3], colors::FILL)
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// A triangle ready for rasterization.
///
/// `points` hold screen x/y in pixels, NDC depth in z and the view-space
/// depth in w, which the rasterizer needs for perspective-correct texturing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec4; 3],
    pub texcoords: [TexCoord; 3],
    /// Flat-shaded face color.
    pub color: u32,
}

impl Triangle {
    pub fn new(points: [Vec4; 3], texcoords: [TexCoord; 3], color: u32) -> Self {
        Self {
            points,
            texcoords,
            color,
        }
    }

    /// Signed doubled area in screen space. Positive for clockwise winding
    /// on a Y-down screen.
    pub fn screen_area2(&self) -> f32 {
        let [a, b, c] = self.points;
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }
}
