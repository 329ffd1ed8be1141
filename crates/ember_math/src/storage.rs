//! Compact storage layouts
//!
//! The only serialization surface of the library: tightly packed float
//! arrays the rendering layer feeds straight into GPU uploads. `A`-suffixed
//! variants require 16-byte alignment; in Rust that precondition lives in the
//! type itself (`align(16)`), so taking a reference to one is already proof
//! of alignment and no runtime check is needed.
//!
//! Layout contracts:
//! - `Float4x4` is the full matrix, row-major.
//! - `Float4x3` stores the four rows with the fourth column dropped; loading
//!   reconstructs it as `(0, 0, 0, 1)^T`.
//! - `Float3x4` stores three rows of four holding the x/y/z *columns* of the
//!   matrix (the transposed 4x3 part); the w column is reconstructed as
//!   `(0, 0, 0, 1)^T` on load.
//! - `Float3x3` stores the upper-left 3x3; the rest reloads as identity.
//!
//! Everything that is padding-free implements [`bytemuck::Pod`], so casting
//! to bytes needs no unsafe code at the call site. `Float2A`/`Float3A` carry
//! tail padding and stay at [`bytemuck::Zeroable`].

use crate::matrix::Mat4;
use crate::vector::{Vec2, Vec3, Vec4};
use bytemuck::{Pod, Zeroable};

/// Two packed floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Float2 {
    pub x: f32,
    pub y: f32,
}

/// Three packed floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Four packed floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Float4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// [`Float2`] at a 16-byte-aligned address (8 bytes of tail padding).
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
#[repr(C, align(16))]
pub struct Float2A {
    pub x: f32,
    pub y: f32,
}

/// [`Float3`] at a 16-byte-aligned address (4 bytes of tail padding).
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
#[repr(C, align(16))]
pub struct Float3A {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// [`Float4`] at a 16-byte-aligned address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
#[repr(C, align(16))]
pub struct Float4A {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

// No padding: 16 bytes at alignment 16.
unsafe impl Pod for Float4A {}

/// Row-major 3x3, nine packed floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Float3x3 {
    pub m: [[f32; 3]; 3],
}

/// Three rows of four: the x/y/z columns of a 4x4.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Float3x4 {
    pub m: [[f32; 4]; 3],
}

/// Four rows of three: a 4x4 with the w column dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Float4x3 {
    pub m: [[f32; 3]; 4],
}

/// Full row-major 4x4, sixteen packed floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Float4x4 {
    pub m: [[f32; 4]; 4],
}

/// [`Float3x4`] at a 16-byte-aligned address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
#[repr(C, align(16))]
pub struct Float3x4A {
    pub m: [[f32; 4]; 3],
}

// 48 bytes at alignment 16, no padding.
unsafe impl Pod for Float3x4A {}

/// [`Float4x3`] at a 16-byte-aligned address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
#[repr(C, align(16))]
pub struct Float4x3A {
    pub m: [[f32; 3]; 4],
}

// 48 bytes at alignment 16, no padding.
unsafe impl Pod for Float4x3A {}

/// [`Float4x4`] at a 16-byte-aligned address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
#[repr(C, align(16))]
pub struct Float4x4A {
    pub m: [[f32; 4]; 4],
}

// 64 bytes at alignment 16, no padding.
unsafe impl Pod for Float4x4A {}

// --- vector load/store ------------------------------------------------------

impl Vec2 {
    #[inline]
    pub fn from_float2(source: &Float2) -> Self {
        Self::new(source.x, source.y)
    }

    #[inline]
    pub fn to_float2(self) -> Float2 {
        Float2 { x: self.x, y: self.y }
    }

    #[inline]
    pub fn from_float2a(source: &Float2A) -> Self {
        Self::new(source.x, source.y)
    }

    #[inline]
    pub fn to_float2a(self) -> Float2A {
        Float2A { x: self.x, y: self.y }
    }
}

impl Vec3 {
    #[inline]
    pub fn from_float3(source: &Float3) -> Self {
        Self::new(source.x, source.y, source.z)
    }

    #[inline]
    pub fn to_float3(self) -> Float3 {
        Float3 { x: self.x, y: self.y, z: self.z }
    }

    #[inline]
    pub fn from_float3a(source: &Float3A) -> Self {
        Self::new(source.x, source.y, source.z)
    }

    #[inline]
    pub fn to_float3a(self) -> Float3A {
        Float3A { x: self.x, y: self.y, z: self.z }
    }
}

impl Vec4 {
    #[inline]
    pub fn from_float4(source: &Float4) -> Self {
        Self::new(source.x, source.y, source.z, source.w)
    }

    #[inline]
    pub fn to_float4(self) -> Float4 {
        Float4 { x: self.x, y: self.y, z: self.z, w: self.w }
    }

    #[inline]
    pub fn from_float4a(source: &Float4A) -> Self {
        Self::new(source.x, source.y, source.z, source.w)
    }

    #[inline]
    pub fn to_float4a(self) -> Float4A {
        Float4A { x: self.x, y: self.y, z: self.z, w: self.w }
    }
}

// --- matrix load/store ------------------------------------------------------

impl Mat4 {
    pub fn from_float4x4(source: &Float4x4) -> Self {
        Self::from_rows_array(source.m)
    }

    pub fn to_float4x4(&self) -> Float4x4 {
        Float4x4 { m: self.to_rows_array() }
    }

    pub fn from_float4x4a(source: &Float4x4A) -> Self {
        Self::from_rows_array(source.m)
    }

    pub fn to_float4x4a(&self) -> Float4x4A {
        Float4x4A { m: self.to_rows_array() }
    }

    /// Loads four rows of three, reconstructing the w column as
    /// `(0, 0, 0, 1)^T`.
    pub fn from_float4x3(source: &Float4x3) -> Self {
        let m = &source.m;
        Self::from_rows(
            Vec4::new(m[0][0], m[0][1], m[0][2], 0.0),
            Vec4::new(m[1][0], m[1][1], m[1][2], 0.0),
            Vec4::new(m[2][0], m[2][1], m[2][2], 0.0),
            Vec4::new(m[3][0], m[3][1], m[3][2], 1.0),
        )
    }

    /// Stores the four rows, dropping the w column.
    pub fn to_float4x3(&self) -> Float4x3 {
        let r = &self.rows;
        Float4x3 {
            m: [
                [r[0].x, r[0].y, r[0].z],
                [r[1].x, r[1].y, r[1].z],
                [r[2].x, r[2].y, r[2].z],
                [r[3].x, r[3].y, r[3].z],
            ],
        }
    }

    pub fn from_float4x3a(source: &Float4x3A) -> Self {
        Self::from_float4x3(&Float4x3 { m: source.m })
    }

    pub fn to_float4x3a(&self) -> Float4x3A {
        Float4x3A { m: self.to_float4x3().m }
    }

    /// Loads the transposed 4x3 layout: stored row i carries matrix column i.
    /// The w column reloads as `(0, 0, 0, 1)^T`.
    pub fn from_float3x4(source: &Float3x4) -> Self {
        let m = &source.m;
        Self::from_rows(
            Vec4::new(m[0][0], m[1][0], m[2][0], 0.0),
            Vec4::new(m[0][1], m[1][1], m[2][1], 0.0),
            Vec4::new(m[0][2], m[1][2], m[2][2], 0.0),
            Vec4::new(m[0][3], m[1][3], m[2][3], 1.0),
        )
    }

    /// Stores the x/y/z columns across all four rows, dropping the w column.
    pub fn to_float3x4(&self) -> Float3x4 {
        let r = &self.rows;
        Float3x4 {
            m: [
                [r[0].x, r[1].x, r[2].x, r[3].x],
                [r[0].y, r[1].y, r[2].y, r[3].y],
                [r[0].z, r[1].z, r[2].z, r[3].z],
            ],
        }
    }

    pub fn from_float3x4a(source: &Float3x4A) -> Self {
        Self::from_float3x4(&Float3x4 { m: source.m })
    }

    pub fn to_float3x4a(&self) -> Float3x4A {
        Float3x4A { m: self.to_float3x4().m }
    }

    /// Loads the upper-left 3x3; the remainder reloads as identity.
    pub fn from_float3x3(source: &Float3x3) -> Self {
        let m = &source.m;
        Self::from_rows(
            Vec4::new(m[0][0], m[0][1], m[0][2], 0.0),
            Vec4::new(m[1][0], m[1][1], m[1][2], 0.0),
            Vec4::new(m[2][0], m[2][1], m[2][2], 0.0),
            Vec4::W,
        )
    }

    /// Stores the upper-left 3x3.
    pub fn to_float3x3(&self) -> Float3x3 {
        let r = &self.rows;
        Float3x3 {
            m: [
                [r[0].x, r[0].y, r[0].z],
                [r[1].x, r[1].y, r[1].z],
                [r[2].x, r[2].y, r[2].z],
            ],
        }
    }
}
