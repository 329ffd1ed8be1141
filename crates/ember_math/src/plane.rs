//! Plane in 3D space
//!
//! `ax + by + cz + d = 0`, stored as four components so plane math maps onto
//! the [`Vec4`] operations. `(a, b, c)` is the normal; nothing here keeps the
//! plane normalized, so call [`Plane::normalize`] before operations that need
//! a unit normal ([`Mat4::reflect`](crate::Mat4::reflect) and
//! [`Mat4::shadow`](crate::Mat4::shadow) do so themselves).

use crate::vector::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub fn from_normal_d(normal: Vec3, d: f32) -> Self {
        Self::new(normal.x, normal.y, normal.z, d)
    }

    /// Plane through `point` with the given normal.
    #[inline]
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self::from_normal_d(normal, -normal.dot(point))
    }

    /// Plane through three points with counter-clockwise winding.
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        let normal = (p1 - p0).cross(p2 - p0).normalize();
        Self::from_point_normal(p0, normal)
    }

    #[inline]
    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.a, self.b, self.c, self.d)
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Scales all four components by the reciprocal length of the normal.
    /// A zero normal yields the zero plane, mirroring the exact vector
    /// normalize.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.normal().length();
        let scale = if len > 0.0 { 1.0 / len } else { len };
        Self::new(self.a * scale, self.b * scale, self.c * scale, self.d * scale)
    }

    /// Four-component dot product against a homogeneous point or direction.
    #[inline]
    pub fn dot(self, v: Vec4) -> f32 {
        self.to_vec4().dot(v).x
    }

    /// Signed distance to a point (w treated as 1). Positive is the normal
    /// side.
    #[inline]
    pub fn dot_coord(self, point: Vec3) -> f32 {
        self.normal().dot(point) + self.d
    }

    /// Dot against a direction (w treated as 0).
    #[inline]
    pub fn dot_normal(self, v: Vec3) -> f32 {
        self.normal().dot(v)
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.to_vec4().is_nan()
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.to_vec4().is_infinite()
    }
}
