//! Homogeneous coordinates.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::vec3::Vec3;

/// A point or direction in homogeneous form, as consumed and produced by
/// [`super::Mat4`]. After projection `w` carries the view-space depth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A position: w = 1, so translations apply.
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Drops w without dividing.
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn magnitude(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Divides all four components by the length. Zero-length input yields
    /// NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Component-wise interpolation, w included.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<Vec3> for Vec4 {
    fn from(v: Vec3) -> Self {
        Self::point(v.x, v.y, v.z)
    }
}

impl From<Vec4> for Vec3 {
    fn from(v: Vec4) -> Self {
        v.to_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vec3_converts_to_point() {
        let v = Vec4::from(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(v, Vec4::new(1.0, -2.0, 3.0, 1.0));
        assert_eq!(Vec3::from(Vec4::new(1.0, -2.0, 3.0, 7.0)), Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(0.5, -1.0, 2.0, -4.0);

        assert_eq!(a + b, Vec4::new(1.5, 1.0, 5.0, 0.0));
        assert_eq!(a - b, Vec4::new(0.5, 3.0, 1.0, 8.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a - a, Vec4::ZERO);
    }

    #[test]
    fn dot_includes_w() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_relative_eq!(a.dot(Vec4::new(0.0, 0.0, 0.0, 1.0)), 4.0);
        assert_relative_eq!(a.dot(a), 30.0);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let v = Vec4::new(2.0, 0.0, 0.0, 2.0).normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.x, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        assert!(Vec4::ZERO.normalize().x.is_nan());
    }

    #[test]
    fn lerp_interpolates_w() {
        let a = Vec4::point(0.0, 0.0, 1.0);
        let b = Vec4::new(2.0, 4.0, 3.0, 3.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.x, 1.0);
        assert_relative_eq!(mid.y, 2.0);
        assert_relative_eq!(mid.z, 2.0);
        assert_relative_eq!(mid.w, 2.0);
    }
}
