//! Quaternion rotations
//!
//! `Quat` is `w + xi + yj + zk` stored as four lanes. Nothing here enforces
//! unit length; normalize before handing a quaternion to anything that
//! assumes a pure rotation ([`Mat4::from_quat`], matrix extraction).
//!
//! Composition reads left to right like the row-vector matrix convention:
//! `q1 * q2` is "rotate by q1, then by q2", and
//! `Mat4::from_quat(q1 * q2) == Mat4::from_quat(q1) * Mat4::from_quat(q2)`.

use crate::matrix::Mat4;
use crate::scalar;
use crate::vector::{Vec3, Vec4};
use core::ops::{Mul, MulAssign};

/// Quaternion representing a 3D rotation
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Rotation about `axis` (any length, must not be zero) by `angle`
    /// radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        debug_assert!(axis.length_squared() > 0.0, "rotation axis must not be zero");
        debug_assert!(!axis.is_infinite());
        Self::from_axis_angle_normal(axis.normalize(), angle)
    }

    /// Rotation about a unit-length `normal` by `angle` radians.
    #[inline]
    pub fn from_axis_angle_normal(normal: Vec3, angle: f32) -> Self {
        let (sin, cos) = scalar::sin_cos(angle * 0.5);
        Self::new(normal.x * sin, normal.y * sin, normal.z * sin, cos)
    }

    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = scalar::sin_cos(angle * 0.5);
        Self::new(sin, 0.0, 0.0, cos)
    }

    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = scalar::sin_cos(angle * 0.5);
        Self::new(0.0, sin, 0.0, cos)
    }

    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = scalar::sin_cos(angle * 0.5);
        Self::new(0.0, 0.0, sin, cos)
    }

    /// Rotation applying roll (about z), then pitch (about x), then yaw
    /// (about y), matching [`Mat4::from_roll_pitch_yaw`].
    #[inline]
    pub fn from_roll_pitch_yaw(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::from_rotation_z(roll) * Self::from_rotation_x(pitch) * Self::from_rotation_y(yaw)
    }

    /// Angles packed as `(pitch, yaw, roll)` in x, y, z.
    #[inline]
    pub fn from_roll_pitch_yaw_vec3(angles: Vec3) -> Self {
        Self::from_roll_pitch_yaw(angles.x, angles.y, angles.z)
    }

    /// Extracts the rotation from the upper-left 3x3 of a matrix.
    ///
    /// The input must be a pure rotation; scale or shear is not detected and
    /// produces garbage, since no orthonormalization is performed.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let r = &m.rows;
        let trace = r[0].x + r[1].y + r[2].z;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                (r[1].z - r[2].y) / s,
                (r[2].x - r[0].z) / s,
                (r[0].y - r[1].x) / s,
                0.25 * s,
            )
        } else if r[0].x > r[1].y && r[0].x > r[2].z {
            let s = (1.0 + r[0].x - r[1].y - r[2].z).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (r[0].y + r[1].x) / s,
                (r[2].x + r[0].z) / s,
                (r[1].z - r[2].y) / s,
            )
        } else if r[1].y > r[2].z {
            let s = (1.0 + r[1].y - r[0].x - r[2].z).sqrt() * 2.0;
            Self::new(
                (r[0].y + r[1].x) / s,
                0.25 * s,
                (r[1].z + r[2].y) / s,
                (r[2].x - r[0].z) / s,
            )
        } else {
            let s = (1.0 + r[2].z - r[0].x - r[1].y).sqrt() * 2.0;
            Self::new(
                (r[2].x + r[0].z) / s,
                (r[1].z + r[2].y) / s,
                0.25 * s,
                (r[0].y - r[1].x) / s,
            )
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Conjugate; equals the inverse for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn inverse(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 0.0 {
            let inv = 1.0 / len_sq;
            Self::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
        } else {
            Self::IDENTITY
        }
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Rotates a vector. Equal to transforming by
    /// [`Mat4::from_quat`]`(self)`.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// Spherical interpolation with shortest-path handling: when the inputs
    /// point into opposite hemispheres, the far one is negated so the blend
    /// never takes the long way around.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut dot = self.dot(other);
        let mut other = other;

        if dot < 0.0 {
            other = other.negate();
            dot = -dot;
        }

        dot = dot.clamp(-1.0, 1.0);

        // Nearly parallel: fall back to normalized lerp.
        if dot > 0.9995 {
            return Self::new(
                self.x + (other.x - self.x) * t,
                self.y + (other.y - self.y) * t,
                self.z + (other.z - self.z) * t,
                self.w + (other.w - self.w) * t,
            )
            .normalize();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let s0 = ((1.0 - t) * theta).sin() / sin_theta;
        let s1 = (t * theta).sin() / sin_theta;

        Self::new(
            self.x * s0 + other.x * s1,
            self.y * s0 + other.y * s1,
            self.z * s0 + other.z * s1,
            self.w * s0 + other.w * s1,
        )
    }

    /// Normalized linear interpolation with the same shortest-path sign flip
    /// as [`slerp`](Self::slerp); cheaper, slightly non-constant velocity.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let other = if self.dot(other) < 0.0 { other.negate() } else { other };
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
        .normalize()
    }

    /// Recovers the rotation axis and angle. The identity rotation reports
    /// the y axis with angle 0.
    pub fn to_axis_angle(self) -> (Vec3, f32) {
        let q = if self.w < 0.0 { self.negate() } else { self };

        let angle = 2.0 * q.w.clamp(-1.0, 1.0).acos();
        let s = (1.0 - q.w * q.w).max(0.0).sqrt();

        if s < 1e-6 {
            (Vec3::Y, angle)
        } else {
            (Vec3::new(q.x / s, q.y / s, q.z / s), angle)
        }
    }

    /// Recovers `(pitch, yaw, roll)` such that
    /// [`from_roll_pitch_yaw_vec3`](Self::from_roll_pitch_yaw_vec3) rebuilds
    /// the same rotation. Requires a unit quaternion.
    pub fn to_euler(self) -> Vec3 {
        let sinp = 2.0 * (self.w * self.x - self.y * self.z);
        let pitch = if sinp.abs() >= 1.0 {
            crate::consts::HALF_PI.copysign(sinp)
        } else {
            sinp.asin()
        };

        let yaw = (2.0 * (self.x * self.z + self.w * self.y))
            .atan2(1.0 - 2.0 * (self.x * self.x + self.y * self.y));
        let roll = (2.0 * (self.x * self.y + self.w * self.z))
            .atan2(1.0 - 2.0 * (self.x * self.x + self.z * self.z));

        Vec3::new(pitch, yaw, roll)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;

    /// Composes rotations in application order: `self` first, then `rhs`.
    /// This is the Hamilton product `rhs * self`.
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (rhs, self);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    fn assert_rotation_eq(a: Quat, b: Quat, eps: f32) {
        // q and -q are the same rotation.
        assert!(a.dot(b).abs() > 1.0 - eps, "{a:?} != {b:?}");
    }

    #[test]
    fn identity_is_a_no_op() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!((Quat::IDENTITY * v - v).length() < 1e-6);
    }

    #[test]
    fn rotation_y_quarter_turn() {
        let q = Quat::from_rotation_y(consts::HALF_PI);
        let r = q * Vec3::X;
        assert!((r - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn multiplication_composes_in_application_order() {
        // Rotate +X a quarter turn about Z (-> +Y), then a quarter turn
        // about X (-> +Z).
        let qz = Quat::from_rotation_z(consts::HALF_PI);
        let qx = Quat::from_rotation_x(consts::HALF_PI);

        let sequential = qx * (qz * Vec3::X); // wrong order would give -Y
        let stepwise = qx.rotate(qz.rotate(Vec3::X));
        let composed = (qz * qx).rotate(Vec3::X);

        assert!((stepwise - Vec3::Z).length() < 1e-5);
        assert!((composed - Vec3::Z).length() < 1e-5);
        assert!((sequential - composed).length() < 1e-5);
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = Vec3::new(1.0, 2.0, -0.5).normalize();
        let angle = 1.1;
        let q = Quat::from_axis_angle(axis, angle);
        let (raxis, rangle) = q.to_axis_angle();
        assert!((raxis - axis).length() < 1e-4);
        assert!((rangle - angle).abs() < 1e-4);
    }

    #[test]
    fn roll_pitch_yaw_round_trip() {
        let angles = Vec3::new(0.4, -0.9, 1.3);
        let q = Quat::from_roll_pitch_yaw_vec3(angles);
        let back = q.to_euler();
        assert!((back - angles).length() < 1e-4, "{back:?}");
        assert_rotation_eq(Quat::from_roll_pitch_yaw_vec3(back), q, 1e-5);
    }

    #[test]
    fn conjugate_inverts_unit_rotations() {
        let q = Quat::from_axis_angle(Vec3::new(0.3, 1.0, -0.2), 0.8);
        let v = Vec3::new(1.0, -2.0, 0.5);
        let back = q.conjugate().rotate(q.rotate(v));
        assert!((back - v).length() < 1e-5);
        assert_rotation_eq(q * q.inverse(), Quat::IDENTITY, 1e-5);
    }

    #[test]
    fn slerp_halfway_bisects() {
        let q1 = Quat::IDENTITY;
        let q2 = Quat::from_rotation_y(consts::PI * 0.5);
        let mid = q1.slerp(q2, 0.5);
        let expected = Quat::from_rotation_y(consts::PI * 0.25);
        assert_rotation_eq(mid, expected, 1e-5);
    }

    #[test]
    fn slerp_takes_the_short_path() {
        let q1 = Quat::from_rotation_y(0.1);
        let q2 = Quat::from_rotation_y(0.4).negate(); // same rotation, far hemisphere
        let mid = q1.slerp(q2, 0.5);
        assert_rotation_eq(mid, Quat::from_rotation_y(0.25), 1e-4);

        let l = q1.lerp(q2, 0.5);
        assert_rotation_eq(l, Quat::from_rotation_y(0.25), 1e-4);
    }

    #[test]
    fn from_rotation_matrix_round_trips() {
        for (axis, angle) in [
            (Vec3::X, 0.3),
            (Vec3::Y, -2.2),
            (Vec3::Z, 2.9),
            (Vec3::new(1.0, 1.0, 1.0), 1.0),
            (Vec3::new(-0.3, 0.8, 0.6), 3.0),
        ] {
            let q = Quat::from_axis_angle(axis, angle);
            let m = Mat4::from_quat(q);
            let back = Quat::from_rotation_matrix(&m);
            assert_rotation_eq(back, q, 1e-4);
        }
    }

    #[test]
    fn normalize_handles_degenerate_input() {
        let q = Quat::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(q.normalize(), Quat::IDENTITY);
        let q = Quat::new(0.0, 4.0, 0.0, 3.0).normalize();
        assert!((q.length() - 1.0).abs() < 1e-6);
    }
}
