//! 4x4 transformation matrix.
//!
//! # Convention
//! - Storage is **row-major**: `data[row][col]`
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! # Example
//! ```ignore
//! let world = translation * rotation * scale; // scale first, then rotate, then translate
//! let result = world * vertex;
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the X axis. Matches [`Vec3::rotate_x`].
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the Y axis. Matches [`Vec3::rotate_y`].
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the Z axis. Matches [`Vec3::rotate_z`].
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a perspective matrix with left-handed coordinate system.
    ///
    /// `fov` is the vertical field of view in radians and `aspect_ratio` is
    /// width / height. The camera looks down +Z; depth maps to [-1, 1] and the
    /// view-space z is copied into w.
    pub fn perspective_lh(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let t = near * (fov / 2.0).tan();
        let r = t * aspect_ratio;
        let a = (far + near) / (far - near);
        let b = -2.0 * far * near / (far - near);
        Mat4::new([
            [near / r, 0.0, 0.0, 0.0],
            [0.0, near / t, 0.0, 0.0],
            [0.0, 0.0, a, b],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Creates a view matrix with left-handed coordinate system.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The up direction of the camera.
    pub fn look_at_lh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);

        // Basis vectors as rows, followed by the inverse eye translation.
        Self::new([
            [right.x, right.y, right.z, -right.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [forward.x, forward.y, forward.z, -forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Multiplies `v` and divides x, y, z by the resulting w.
    ///
    /// The undivided w is kept so later stages can interpolate
    /// perspective-correctly. A zero w is left undivided.
    pub fn project(&self, v: Vec4) -> Vec4 {
        let clip = *self * v;
        if clip.w != 0.0 {
            Vec4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, clip.w)
        } else {
            clip
        }
    }
}

/// Matrix multiplication: `A * B` applies B first when used on a vector.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }

        Mat4::new(result)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

/// Transform a point: treats the Vec3 as a column vector with w=1 and drops
/// the resulting w. Intended for affine matrices.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        (self * Vec4::from(v)).to_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn rotation_matrices_agree_with_vector_rotation() {
        let v = Vec3::new(0.3, -1.2, 2.5);
        let angle = 0.7;
        assert_vec3_eq(Mat4::rotation_x(angle) * v, v.rotate_x(angle));
        assert_vec3_eq(Mat4::rotation_y(angle) * v, v.rotate_y(angle));
        assert_vec3_eq(Mat4::rotation_z(angle) * v, v.rotate_z(angle));
    }

    #[test]
    fn composition_applies_scale_then_translation() {
        let m = Mat4::translation(1.0, 0.0, 0.0) * Mat4::scaling(2.0, 2.0, 2.0);
        assert_vec3_eq(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let s = Mat4::scaling(2.0, 2.0, 2.0);
        assert_ne!(t * s, s * t);
    }

    #[test]
    fn multiplication_is_associative() {
        let a = Mat4::rotation_x(0.3);
        let b = Mat4::translation(1.0, 2.0, 3.0);
        let c = Mat4::scaling(0.5, 2.0, 1.0);
        let v = Vec3::new(1.0, -1.0, 0.5);
        assert_vec3_eq(((a * b) * c) * v, (a * (b * c)) * v);
    }

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::rotation_y(1.1) * Mat4::translation(0.0, 3.0, 0.0);
        assert_eq!(Mat4::identity() * m, m);
        assert_eq!(m * Mat4::identity(), m);
    }

    #[test]
    fn look_at_moves_target_onto_positive_z() {
        let view = Mat4::look_at_lh(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::UP);
        assert_vec3_eq(view * Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn project_maps_near_and_far_to_ndc_bounds() {
        let proj = Mat4::perspective_lh(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0);

        let near = proj.project(Vec4::point(0.0, 0.0, 1.0));
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-5);
        assert_relative_eq!(near.w, 1.0, epsilon = 1e-5);

        let far = proj.project(Vec4::point(0.0, 0.0, 10.0));
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-5);
        assert_relative_eq!(far.w, 10.0, epsilon = 1e-5);
    }

    #[test]
    fn project_maps_frustum_edge_to_ndc_edge() {
        // 90 degree fov: the edge at depth z sits at x = z.
        let proj = Mat4::perspective_lh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let p = proj.project(Vec4::point(4.0, -4.0, 4.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-5);
    }
}
