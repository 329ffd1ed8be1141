//! # ember_math - SIMD-oriented math library
//!
//! Vector, quaternion, plane and matrix primitives for the Ember Engine's
//! rendering and simulation layers.
//!
//! Everything is an immutable `Copy` value type and every operation is a pure
//! function: no allocation, no shared state, nothing to synchronize. The
//! matrix type is row-major with the row-vector convention (`p' = p * m`), so
//! transform chains read left to right in application order.
//!
//! Componentwise arithmetic funnels through an internal four-lane kernel
//! with a portable implementation and, behind the `simd` feature, SSE2
//! intrinsics producing bit-identical results. `_est`-suffixed functions
//! trade accuracy for speed and are opted into explicitly by name.
//!
//! The compact [`storage`] layouts (`Float4x4`, `Float4x3`, ...) are the only
//! serialization surface; the GPU backend consumes them as raw bytes.

pub mod mask;
pub mod matrix;
pub mod plane;
pub mod quaternion;
pub mod scalar;
pub mod storage;
pub mod vector;

mod simd;

pub use mask::Bool4;
pub use matrix::Mat4;
pub use plane::Plane;
pub use quaternion::Quat;
pub use storage::{
    Float2, Float2A, Float3, Float3A, Float3x3, Float3x4, Float3x4A, Float4, Float4A, Float4x3,
    Float4x3A, Float4x4, Float4x4A,
};
pub use vector::{Vec2, Vec3, Vec4};

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = PI * 2.0;
    pub const HALF_PI: f32 = PI / 2.0;
    pub const QUARTER_PI: f32 = PI / 4.0;
    pub const ONE_OVER_PI: f32 = 1.0 / PI;
    pub const ONE_OVER_TAU: f32 = 1.0 / TAU;
    pub const LOG2_E: f32 = core::f32::consts::LOG2_E;
    pub const LN_2: f32 = core::f32::consts::LN_2;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Smooth step interpolation
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fast inverse square root (Quake-style, modernized)
#[inline]
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let i = x.to_bits();
    let i = 0x5f3759df - (i >> 1);
    let y = f32::from_bits(i);
    y * (1.5 - half * y * y)
}

pub mod prelude {
    pub use crate::mask::Bool4;
    pub use crate::matrix::Mat4;
    pub use crate::plane::Plane;
    pub use crate::quaternion::Quat;
    pub use crate::storage::{
        Float2, Float2A, Float3, Float3A, Float3x3, Float3x4, Float3x4A, Float4, Float4A,
        Float4x3, Float4x3A, Float4x4, Float4x4A,
    };
    pub use crate::vector::{Vec2, Vec3, Vec4};
    pub use crate::{clamp, degrees, fast_inv_sqrt, lerp, radians, smoothstep};
}
