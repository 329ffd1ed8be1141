//! Vector types
//!
//! `Vec2` and `Vec3` are narrow componentwise types; `Vec4` is the four-lane
//! workhorse every other entity in the library is built from. Scalar-producing
//! `Vec4` operations (`dot`, `length`, `angle_between`, ...) return the scalar
//! broadcast across all four lanes, so downstream SIMD code never extracts a
//! lane just to re-splat it. The narrow types return plain `f32` instead.

use crate::mask::Bool4;
use crate::scalar;
use crate::simd;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product of the two vectors lifted into the
    /// xy-plane.
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction; the zero vector normalizes to zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { self * len }
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            if self.x < other.x { self.x } else { other.x },
            if self.y < other.y { self.y } else { other.y },
        )
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            if self.x > other.x { self.x } else { other.x },
            if self.y > other.y { self.y } else { other.y },
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

/// 3D vector, padded to 16 bytes for the SIMD backend
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[cfg_attr(feature = "serde", serde(skip))]
    _pad: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, _pad: 0.0 }
    }

    #[inline]
    pub fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction; the zero vector normalizes to zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { self * len }
    }

    /// Fast normalize via the reciprocal-sqrt estimate. Unlike
    /// [`normalize`](Self::normalize), the zero vector comes back non-finite.
    #[inline]
    pub fn normalize_est(self) -> Self {
        let lsq = self.length_squared();
        self * (1.0 / (lsq * crate::fast_inv_sqrt(lsq)))
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * 2.0 * self.dot(normal)
    }

    #[inline]
    pub fn project_onto(self, other: Self) -> Self {
        other * (self.dot(other) / other.length_squared())
    }

    /// Angle in radians between two vectors of any length.
    #[inline]
    pub fn angle_between(self, other: Self) -> f32 {
        let denom = self.length() * other.length();
        scalar::acos((self.dot(other) / denom).clamp(-1.0, 1.0))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            if self.x < other.x { self.x } else { other.x },
            if self.y < other.y { self.y } else { other.y },
            if self.z < other.z { self.z } else { other.z },
        )
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            if self.x > other.x { self.x } else { other.x },
            if self.y > other.y { self.y } else { other.y },
            if self.z > other.z { self.z } else { other.z },
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        scalar::is_nan(self.x) || scalar::is_nan(self.y) || scalar::is_nan(self.z)
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        scalar::is_infinite(self.x) || scalar::is_infinite(self.y) || scalar::is_infinite(self.z)
    }

    /// Promote to a [`Vec4`] with the given w: 0 for directions, 1 for
    /// positions.
    #[inline]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// 4D vector: homogeneous coordinates and the library's SIMD lane carrier
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0, 0.0);
    pub const NEG_W: Self = Self::new(0.0, 0.0, 0.0, -1.0);
    /// Machine epsilon splat, handy for [`cmp_eq_eps`](Self::cmp_eq_eps).
    pub const EPSILON: Self = Self::new(f32::EPSILON, f32::EPSILON, f32::EPSILON, f32::EPSILON);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The same 128 bits viewed as four `u32` lanes.
    #[inline]
    pub fn to_bits(self) -> [u32; 4] {
        [
            self.x.to_bits(),
            self.y.to_bits(),
            self.z.to_bits(),
            self.w.to_bits(),
        ]
    }

    /// Reinterprets four `u32` lanes as float lanes, bit for bit.
    #[inline]
    pub fn from_bits(bits: [u32; 4]) -> Self {
        Self::new(
            f32::from_bits(bits[0]),
            f32::from_bits(bits[1]),
            f32::from_bits(bits[2]),
            f32::from_bits(bits[3]),
        )
    }

    /// Runtime-indexed lane read; `index` must be 0..=3.
    #[inline]
    pub fn lane(self, index: usize) -> f32 {
        self.to_array()[index]
    }

    /// Returns a copy with lane `index` replaced.
    #[inline]
    pub fn with_lane(self, index: usize, value: f32) -> Self {
        let mut a = self.to_array();
        a[index] = value;
        Self::from_array(a)
    }

    /// Runtime-indexed lane read of the `u32` view.
    #[inline]
    pub fn lane_bits(self, index: usize) -> u32 {
        self.to_bits()[index]
    }

    /// Returns a copy with lane `index` replaced through the `u32` view,
    /// never touching float semantics.
    #[inline]
    pub fn with_lane_bits(self, index: usize, bits: u32) -> Self {
        let mut b = self.to_bits();
        b[index] = bits;
        Self::from_bits(b)
    }

    #[inline]
    pub fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y, self.z, self.w)
    }

    #[inline]
    pub fn with_y(self, y: f32) -> Self {
        Self::new(self.x, y, self.z, self.w)
    }

    #[inline]
    pub fn with_z(self, z: f32) -> Self {
        Self::new(self.x, self.y, z, self.w)
    }

    #[inline]
    pub fn with_w(self, w: f32) -> Self {
        Self::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn splat_x(self) -> Self {
        Self::splat(self.x)
    }

    #[inline]
    pub fn splat_y(self) -> Self {
        Self::splat(self.y)
    }

    #[inline]
    pub fn splat_z(self) -> Self {
        Self::splat(self.z)
    }

    #[inline]
    pub fn splat_w(self) -> Self {
        Self::splat(self.w)
    }

    // --- lane rearrangement -------------------------------------------------

    /// Compile-time swizzle; each index selects one of this vector's lanes.
    /// Identical to [`swizzle_dyn`](Self::swizzle_dyn) by construction.
    #[inline]
    pub fn swizzle<const X: usize, const Y: usize, const Z: usize, const W: usize>(self) -> Self {
        self.swizzle_dyn([X, Y, Z, W])
    }

    /// Runtime swizzle. Lane copies are bit-exact; indices must be 0..=3.
    #[inline]
    pub fn swizzle_dyn(self, lanes: [usize; 4]) -> Self {
        let v = self.to_array();
        Self::new(v[lanes[0]], v[lanes[1]], v[lanes[2]], v[lanes[3]])
    }

    /// Compile-time permute over the eight-lane space
    /// `{a.x,a.y,a.z,a.w,b.x,b.y,b.z,b.w}` addressed 0..=7.
    #[inline]
    pub fn permute<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(
        a: Self,
        b: Self,
    ) -> Self {
        Self::permute_dyn(a, b, [I0, I1, I2, I3])
    }

    /// Runtime permute; indices must be 0..=7.
    #[inline]
    pub fn permute_dyn(a: Self, b: Self, lanes: [usize; 4]) -> Self {
        let ab = [a.x, a.y, a.z, a.w, b.x, b.y, b.z, b.w];
        Self::new(ab[lanes[0]], ab[lanes[1]], ab[lanes[2]], ab[lanes[3]])
    }

    /// Per-lane choice: lanes come from `b` where the mask is set, from `a`
    /// where it is clear. Pure bit selection, so NaN payloads and signed
    /// zeros survive untouched.
    #[inline]
    pub fn select(a: Self, b: Self, mask: Bool4) -> Self {
        let pa = a.to_bits();
        let pb = b.to_bits();
        let m = mask.to_bits();
        Self::from_bits([
            (pa[0] & !m[0]) | (pb[0] & m[0]),
            (pa[1] & !m[1]) | (pb[1] & m[1]),
            (pa[2] & !m[2]) | (pb[2] & m[2]),
            (pa[3] & !m[3]) | (pb[3] & m[3]),
        ])
    }

    // --- comparisons --------------------------------------------------------

    /// Per-lane `==` with IEEE ordered semantics: a NaN lane never compares
    /// equal, not even to itself.
    #[inline]
    pub fn cmp_eq(self, other: Self) -> Bool4 {
        Bool4::new(
            self.x == other.x,
            self.y == other.y,
            self.z == other.z,
            self.w == other.w,
        )
    }

    /// Per-lane `|a - b| <= epsilon`.
    #[inline]
    pub fn cmp_eq_eps(self, other: Self, epsilon: Self) -> Bool4 {
        let d = (self - other).abs();
        Bool4::new(
            d.x <= epsilon.x,
            d.y <= epsilon.y,
            d.z <= epsilon.z,
            d.w <= epsilon.w,
        )
    }

    #[inline]
    pub fn cmp_ne(self, other: Self) -> Bool4 {
        Bool4::new(
            self.x != other.x,
            self.y != other.y,
            self.z != other.z,
            self.w != other.w,
        )
    }

    #[inline]
    pub fn cmp_lt(self, other: Self) -> Bool4 {
        Bool4::new(
            self.x < other.x,
            self.y < other.y,
            self.z < other.z,
            self.w < other.w,
        )
    }

    #[inline]
    pub fn cmp_le(self, other: Self) -> Bool4 {
        Bool4::new(
            self.x <= other.x,
            self.y <= other.y,
            self.z <= other.z,
            self.w <= other.w,
        )
    }

    #[inline]
    pub fn cmp_gt(self, other: Self) -> Bool4 {
        Bool4::new(
            self.x > other.x,
            self.y > other.y,
            self.z > other.z,
            self.w > other.w,
        )
    }

    #[inline]
    pub fn cmp_ge(self, other: Self) -> Bool4 {
        Bool4::new(
            self.x >= other.x,
            self.y >= other.y,
            self.z >= other.z,
            self.w >= other.w,
        )
    }

    /// Per-lane `-bounds <= v <= bounds`.
    #[inline]
    pub fn cmp_in_bounds(self, bounds: Self) -> Bool4 {
        self.cmp_le(bounds) & (-bounds).cmp_le(self)
    }

    /// Per-lane NaN test on the bit pattern.
    #[inline]
    pub fn cmp_nan(self) -> Bool4 {
        Bool4::new(
            scalar::is_nan(self.x),
            scalar::is_nan(self.y),
            scalar::is_nan(self.z),
            scalar::is_nan(self.w),
        )
    }

    /// Per-lane infinity test on the bit pattern.
    #[inline]
    pub fn cmp_infinite(self) -> Bool4 {
        Bool4::new(
            scalar::is_infinite(self.x),
            scalar::is_infinite(self.y),
            scalar::is_infinite(self.z),
            scalar::is_infinite(self.w),
        )
    }

    #[inline]
    pub fn all_eq(self, other: Self) -> bool {
        self.cmp_eq(other).all()
    }

    #[inline]
    pub fn all_ne(self, other: Self) -> bool {
        self.cmp_ne(other).all()
    }

    #[inline]
    pub fn all_lt(self, other: Self) -> bool {
        self.cmp_lt(other).all()
    }

    #[inline]
    pub fn all_le(self, other: Self) -> bool {
        self.cmp_le(other).all()
    }

    #[inline]
    pub fn all_gt(self, other: Self) -> bool {
        self.cmp_gt(other).all()
    }

    #[inline]
    pub fn all_ge(self, other: Self) -> bool {
        self.cmp_ge(other).all()
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.cmp_nan().any()
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.cmp_infinite().any()
    }

    // --- geometry -----------------------------------------------------------

    /// Dot product, splatted into all four lanes.
    #[inline]
    pub fn dot(self, other: Self) -> Self {
        Self::splat(self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w)
    }

    /// Four-dimensional cross product: the vector orthogonal to all three
    /// operands. Unlike the 3D cross this genuinely needs three inputs; it is
    /// the cofactor expansion of a 4x4 determinant, not the 3D formula with a
    /// spare lane.
    pub fn cross(v1: Self, v2: Self, v3: Self) -> Self {
        Self::new(
            ((v2.z * v3.w - v2.w * v3.z) * v1.y) - ((v2.y * v3.w - v2.w * v3.y) * v1.z)
                + ((v2.y * v3.z - v2.z * v3.y) * v1.w),
            ((v2.w * v3.z - v2.z * v3.w) * v1.x) - ((v2.w * v3.x - v2.x * v3.w) * v1.z)
                + ((v2.z * v3.x - v2.x * v3.z) * v1.w),
            ((v2.y * v3.w - v2.w * v3.y) * v1.x) - ((v2.x * v3.w - v2.w * v3.x) * v1.y)
                + ((v2.x * v3.y - v2.y * v3.x) * v1.w),
            ((v2.z * v3.y - v2.y * v3.z) * v1.x) - ((v2.z * v3.x - v2.x * v3.z) * v1.y)
                + ((v2.y * v3.x - v2.x * v3.y) * v1.z),
        )
    }

    /// Squared length, splatted.
    #[inline]
    pub fn length_squared(self) -> Self {
        self.dot(self)
    }

    /// Length, splatted.
    #[inline]
    pub fn length(self) -> Self {
        Self::splat(self.length_squared().x.sqrt())
    }

    /// Fast length estimate via the reciprocal-sqrt bit trick, splatted.
    /// The zero vector reports zero length on this path too.
    #[inline]
    pub fn length_est(self) -> Self {
        let lsq = self.length_squared().x;
        Self::splat(lsq * crate::fast_inv_sqrt(lsq))
    }

    /// `1 / length`, splatted.
    #[inline]
    pub fn recip_length(self) -> Self {
        Self::splat(1.0 / self.length_squared().x.sqrt())
    }

    /// Fast `1 / length` estimate, splatted. Blows up to infinity for the
    /// zero vector, like the hardware reciprocal-sqrt it stands in for.
    #[inline]
    pub fn recip_length_est(self) -> Self {
        Self::splat(1.0 / self.length_est().x)
    }

    /// Unit vector in the same direction. The zero vector normalizes to zero
    /// on this exact path; an infinite-length input yields NaN lanes.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length().x;
        let scale = if len > 0.0 { 1.0 / len } else { len };
        self * scale
    }

    /// Fast normalize via [`recip_length_est`](Self::recip_length_est).
    ///
    /// The zero vector yields non-finite lanes here, unlike the exact
    /// [`normalize`](Self::normalize). The asymmetry is intentional; callers
    /// pick the estimate path knowing degenerate input is not rescued.
    #[inline]
    pub fn normalize_est(self) -> Self {
        self * self.recip_length_est()
    }

    /// Scales the vector so its length lands in `[min, max]`. Zero-length and
    /// non-finite inputs come back unchanged.
    pub fn clamp_length(self, min: f32, max: f32) -> Self {
        debug_assert!(min >= 0.0);
        debug_assert!(max >= min);
        let len = self.length().x;
        if len > 0.0 && !scalar::is_infinite(len) {
            if len < min {
                self * (min / len)
            } else if len > max {
                self * (max / len)
            } else {
                self
            }
        } else {
            self
        }
    }

    /// Reflection of `incident` about `normal`:
    /// `incident - 2 * dot(incident, normal) * normal`.
    #[inline]
    pub fn reflect(incident: Self, normal: Self) -> Self {
        let d = incident.dot(normal);
        incident - normal * (d + d)
    }

    /// Refraction of `incident` through the surface with `normal` and the
    /// given refraction index. Total internal reflection yields the zero
    /// vector.
    pub fn refract(incident: Self, normal: Self, refraction_index: f32) -> Self {
        let index = Self::splat(refraction_index);
        let i_dot_n = incident.dot(normal);
        // r = 1 - index^2 * (1 - dot^2); TIR when r drops to or below zero.
        let r = Self::ONE - index * (index * (Self::ONE - i_dot_n * i_dot_n));
        if r.cmp_le(Self::ZERO).all() {
            Self::ZERO
        } else {
            let scale = index * i_dot_n + r.sqrt();
            index * incident - normal * scale
        }
    }

    /// A vector orthogonal to `self`: `(z, w, -x, -y)`.
    #[inline]
    pub fn orthogonal(self) -> Self {
        Self::new(self.z, self.w, -self.x, -self.y)
    }

    /// Angle in radians between two vectors of any length, splatted.
    #[inline]
    pub fn angle_between(v1: Self, v2: Self) -> Self {
        let cos_angle = v1.dot(v2).x * v1.recip_length().x * v2.recip_length().x;
        Self::splat(scalar::acos(cos_angle.clamp(-1.0, 1.0)))
    }

    /// Angle between two unit vectors, splatted.
    #[inline]
    pub fn angle_between_normals(n1: Self, n2: Self) -> Self {
        Self::splat(scalar::acos(n1.dot(n2).x.clamp(-1.0, 1.0)))
    }

    /// Fast variant of [`angle_between_normals`](Self::angle_between_normals).
    #[inline]
    pub fn angle_between_normals_est(n1: Self, n2: Self) -> Self {
        Self::splat(scalar::acos_est(n1.dot(n2).x.clamp(-1.0, 1.0)))
    }

    /// Horizontal sum of the four lanes, splatted.
    #[inline]
    pub fn sum(self) -> Self {
        Self::splat(self.x + self.y + self.z + self.w)
    }

    /// Distance to another point, splatted.
    #[inline]
    pub fn distance(self, other: Self) -> Self {
        (self - other).length()
    }

    /// Squared distance to another point, splatted.
    #[inline]
    pub fn distance_squared(self, other: Self) -> Self {
        (self - other).length_squared()
    }

    // --- rounding and common ------------------------------------------------

    /// Per-lane minimum with SSE operand ordering (the second operand wins on
    /// NaN or equality), identical across backends.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_array(simd::min(self.to_array(), other.to_array()))
    }

    /// Per-lane maximum, SSE operand ordering.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_array(simd::max(self.to_array(), other.to_array()))
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Clamp to [0, 1].
    #[inline]
    pub fn saturate(self) -> Self {
        self.clamp(Self::ZERO, Self::ONE)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_array(simd::abs(self.to_array()))
    }

    /// Per-lane square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_array(simd::sqrt(self.to_array()))
    }

    /// Per-lane round to nearest, ties to even.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(
            self.x.round_ties_even(),
            self.y.round_ties_even(),
            self.z.round_ties_even(),
            self.w.round_ties_even(),
        )
    }

    /// Per-lane round toward zero.
    #[inline]
    pub fn truncate_lanes(self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc(), self.z.trunc(), self.w.trunc())
    }

    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor(), self.w.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil(), self.w.ceil())
    }

    /// Per-lane floating remainder with truncated-division semantics.
    #[inline]
    pub fn modulo(self, other: Self) -> Self {
        Self::new(
            self.x % other.x,
            self.y % other.y,
            self.z % other.z,
            self.w % other.w,
        )
    }

    /// Per-lane angle reduction to [-pi, pi].
    #[inline]
    pub fn mod_angles(self) -> Self {
        Self::new(
            scalar::mod_angle(self.x),
            scalar::mod_angle(self.y),
            scalar::mod_angle(self.z),
            scalar::mod_angle(self.w),
        )
    }

    /// `self * mul + add`, per lane.
    #[inline]
    pub fn mul_add(self, mul: Self, add: Self) -> Self {
        Self::from_array(simd::mul_add(self.to_array(), mul.to_array(), add.to_array()))
    }

    // --- interpolation ------------------------------------------------------

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Cubic Hermite spline through `p0` (tangent `t0`) and `p1` (tangent
    /// `t1`), evaluated at `t`.
    pub fn hermite(p0: Self, t0: Self, p1: Self, t1: Self, t: f32) -> Self {
        let t2 = t * t;
        let t3 = t * t2;
        let w0 = Self::splat(2.0 * t3 - 3.0 * t2 + 1.0);
        let w1 = Self::splat(t3 - 2.0 * t2 + t);
        let w2 = Self::splat(-2.0 * t3 + 3.0 * t2);
        let w3 = Self::splat(t3 - t2);
        w0 * p0 + w1 * t0 + w2 * p1 + w3 * t1
    }

    /// Catmull-Rom spline through `p1` and `p2` with `p0`/`p3` as the outer
    /// control points.
    pub fn catmull_rom(p0: Self, p1: Self, p2: Self, p3: Self, t: f32) -> Self {
        let t2 = t * t;
        let t3 = t * t2;
        let w0 = Self::splat((-t3 + 2.0 * t2 - t) * 0.5);
        let w1 = Self::splat((3.0 * t3 - 5.0 * t2 + 2.0) * 0.5);
        let w2 = Self::splat((-3.0 * t3 + 4.0 * t2 + t) * 0.5);
        let w3 = Self::splat((t3 - t2) * 0.5);
        w0 * p0 + w1 * p1 + w2 * p2 + w3 * p3
    }

    /// Barycentric interpolation: `p0 + f*(p1 - p0) + g*(p2 - p0)`.
    #[inline]
    pub fn barycentric(p0: Self, p1: Self, p2: Self, f: f32, g: f32) -> Self {
        p0 + (p1 - p0) * f + (p2 - p0) * g
    }

    #[inline]
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn xyz(self) -> Vec3 {
        self.truncate()
    }
}

// Operator implementations for Vec2
impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline] fn mul(self, rhs: Vec2) -> Vec2 { Vec2::new(self * rhs.x, self * rhs.y) }
}
impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs) }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}
impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec2 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

// Operator implementations for Vec3
impl Add for Vec3 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}
impl Sub for Vec3 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z) }
}
impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Vec3) -> Vec3 { Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z) }
}
impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs, self.z / rhs) }
}
impl Neg for Vec3 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}
impl AddAssign for Vec3 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec3 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}
impl MulAssign<f32> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
}

// Operator implementations for Vec4, routed through the lane kernel
impl Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_array(simd::add(self.to_array(), rhs.to_array()))
    }
}
impl Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_array(simd::sub(self.to_array(), rhs.to_array()))
    }
}
impl Mul for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_array(simd::mul(self.to_array(), rhs.to_array()))
    }
}
impl Div for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_array(simd::div(self.to_array(), rhs.to_array()))
    }
}
impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self * Self::splat(rhs)
    }
}
impl Mul<Vec4> for f32 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        Vec4::splat(self) * rhs
    }
}
impl Div<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self / Self::splat(rhs)
    }
}
impl Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_array(simd::neg(self.to_array()))
    }
}
impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl DivAssign<f32> for Vec4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
