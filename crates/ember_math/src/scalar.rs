//! Scalar numeric kernel
//!
//! Branch-light transcendental approximations and float bit-pattern helpers
//! shared by all vector code. The polynomial coefficient tables are minimax
//! fits; the vector types evaluate them per lane so the scalar and vector
//! results are identical by construction.

use crate::consts;

// Minimax coefficients for sine (11-degree) and cosine (10-degree) on
// [-pi/2, pi/2], plus the shorter estimate tables (7/6-degree).
const SIN_C1: f32 = -0.166_666_67;
const SIN_C2: f32 = 8.333_331e-3;
const SIN_C3: f32 = -1.984_087_4e-4;
const SIN_C4: f32 = 2.752_556_2e-6;
const SIN_C5: f32 = -2.388_985_9e-8;

const COS_C1: f32 = -0.5;
const COS_C2: f32 = 4.166_663_8e-2;
const COS_C3: f32 = -1.388_837_8e-3;
const COS_C4: f32 = 2.476_049_5e-5;
const COS_C5: f32 = -2.605_161_5e-7;

const SIN_EST_C1: f32 = -0.166_658_52;
const SIN_EST_C2: f32 = 8.313_950_2e-3;
const SIN_EST_C3: f32 = -1.852_467e-4;

const COS_EST_C1: f32 = -0.499_927_46;
const COS_EST_C2: f32 = 4.149_391_9e-2;
const COS_EST_C3: f32 = -1.271_243_6e-3;

// Arc cosine over sqrt(1 - |x|), 7-degree plus the 3-degree estimate.
const ARC_C0: f32 = 1.570_796_3;
const ARC_C1: f32 = -0.214_598_8;
const ARC_C2: f32 = 8.897_898_74e-2;
const ARC_C3: f32 = -5.017_430_46e-2;
const ARC_C4: f32 = 3.089_188_1e-2;
const ARC_C5: f32 = -1.708_812_56e-2;
const ARC_C6: f32 = 6.670_090_1e-3;
const ARC_C7: f32 = -1.262_491_1e-3;

const ARC_EST_C0: f32 = 1.570_728_8;
const ARC_EST_C1: f32 = -0.212_114_4;
const ARC_EST_C2: f32 = 7.426_1e-2;
const ARC_EST_C3: f32 = -1.872_93e-2;

// 2^-f on (-1, 1), 7 terms.
const EXP_C1: f32 = -6.931_471_82e-1;
const EXP_C2: f32 = 2.402_264_62e-1;
const EXP_C3: f32 = -5.550_364_4e-2;
const EXP_C4: f32 = 9.615_976_36e-3;
const EXP_C5: f32 = -1.328_239_68e-3;
const EXP_C6: f32 = 1.474_910_97e-4;
const EXP_C7: f32 = -1.086_350_04e-5;

// log2(1 + y) / y on [0, 1), 8 terms.
const LOG_C0: f32 = 1.442_693;
const LOG_C1: f32 = -0.721_242;
const LOG_C2: f32 = 0.479_384;
const LOG_C3: f32 = -0.350_295;
const LOG_C4: f32 = 0.248_590;
const LOG_C5: f32 = -0.145_700;
const LOG_C6: f32 = 0.057_148;
const LOG_C7: f32 = -0.010_578;

const EXPONENT_MASK: u32 = 0x7F80_0000;
const ABS_MASK: u32 = 0x7FFF_FFFF;
const TRAILING_MASK: u32 = 0x007F_FFFF;

/// `true` when the value is a NaN, decided purely on the bit pattern: the
/// exponent field is all ones and the trailing significand is non-zero.
#[inline]
pub fn is_nan(value: f32) -> bool {
    (value.to_bits() & ABS_MASK) > EXPONENT_MASK
}

/// `true` for positive or negative infinity, decided purely on the bit
/// pattern.
#[inline]
pub fn is_infinite(value: f32) -> bool {
    (value.to_bits() & ABS_MASK) == EXPONENT_MASK
}

/// Reduces an angle to [-pi, pi] by subtracting the nearest multiple of 2*pi
/// (round-to-nearest-even, so exact multiples split symmetrically).
#[inline]
pub fn mod_angle(angle: f32) -> f32 {
    angle - consts::TAU * (angle * consts::ONE_OVER_TAU).round_ties_even()
}

/// Computes sine and cosine simultaneously.
///
/// Accurate to full float precision on [-pi, pi]; out-of-range angles are
/// reduced with [`mod_angle`] first, which costs at most about one ULP of
/// extra error within a few multiples of 2*pi.
#[inline]
pub fn sin_cos(angle: f32) -> (f32, f32) {
    let x = mod_angle(angle);

    // Mirror into [-pi/2, pi/2]; cosine flips sign in the outer half.
    let (x, cos_sign) = if x > consts::HALF_PI {
        (consts::PI - x, -1.0)
    } else if x < -consts::HALF_PI {
        (-consts::PI - x, -1.0)
    } else {
        (x, 1.0)
    };

    let x2 = x * x;
    let sin = (((((SIN_C5 * x2 + SIN_C4) * x2 + SIN_C3) * x2 + SIN_C2) * x2 + SIN_C1) * x2
        + 1.0)
        * x;
    let cos =
        ((((COS_C5 * x2 + COS_C4) * x2 + COS_C3) * x2 + COS_C2) * x2 + COS_C1) * x2 + 1.0;
    (sin, cos * cos_sign)
}

/// Sine via [`sin_cos`].
#[inline]
pub fn sin(angle: f32) -> f32 {
    sin_cos(angle).0
}

/// Cosine via [`sin_cos`].
#[inline]
pub fn cos(angle: f32) -> f32 {
    sin_cos(angle).1
}

/// Fast sine estimate; relative error around 1e-6 on the reduced range.
#[inline]
pub fn sin_est(angle: f32) -> f32 {
    let x = reduce_mirrored(angle).0;
    let x2 = x * x;
    (((SIN_EST_C3 * x2 + SIN_EST_C2) * x2 + SIN_EST_C1) * x2 + 1.0) * x
}

/// Fast cosine estimate.
#[inline]
pub fn cos_est(angle: f32) -> f32 {
    let (x, cos_sign) = reduce_mirrored(angle);
    let x2 = x * x;
    ((((COS_EST_C3 * x2 + COS_EST_C2) * x2 + COS_EST_C1) * x2) + 1.0) * cos_sign
}

#[inline]
fn reduce_mirrored(angle: f32) -> (f32, f32) {
    let x = mod_angle(angle);
    if x > consts::HALF_PI {
        (consts::PI - x, -1.0)
    } else if x < -consts::HALF_PI {
        (-consts::PI - x, -1.0)
    } else {
        (x, 1.0)
    }
}

/// Arc cosine on [-1, 1] via the 7-degree arc polynomial.
#[inline]
pub fn acos(value: f32) -> f32 {
    let nonnegative = value >= 0.0;
    let x = value.abs();
    let root = (1.0 - x).max(0.0).sqrt();
    let poly = ((((((ARC_C7 * x + ARC_C6) * x + ARC_C5) * x + ARC_C4) * x + ARC_C3) * x
        + ARC_C2)
        * x
        + ARC_C1)
        * x
        + ARC_C0;
    let angle = poly * root;
    if nonnegative { angle } else { consts::PI - angle }
}

/// Arc sine on [-1, 1].
#[inline]
pub fn asin(value: f32) -> f32 {
    consts::HALF_PI - acos(value)
}

/// Fast arc cosine estimate.
#[inline]
pub fn acos_est(value: f32) -> f32 {
    let nonnegative = value >= 0.0;
    let x = value.abs();
    let root = (1.0 - x).max(0.0).sqrt();
    let poly = ((ARC_EST_C3 * x + ARC_EST_C2) * x + ARC_EST_C1) * x + ARC_EST_C0;
    let angle = poly * root;
    if nonnegative { angle } else { consts::PI - angle }
}

/// Fast arc sine estimate.
#[inline]
pub fn asin_est(value: f32) -> f32 {
    consts::HALF_PI - acos_est(value)
}

/// Base-2 exponential, polynomial approximation with the exponent assembled
/// through the float bit layout. Relative error stays below about 1e-4 for
/// graphics-range inputs; overflow saturates to +inf, deep underflow flushes
/// to zero, NaN propagates.
pub fn exp2(value: f32) -> f32 {
    if is_nan(value) {
        return value;
    }
    if value >= 128.0 {
        return f32::INFINITY;
    }
    if value < -150.0 {
        return 0.0;
    }

    let itrunc = value as i32;
    let y = value - itrunc as f32;

    // The polynomial approximates 2^-y on (-1, 1); the integer part becomes
    // the exponent field directly.
    let poly = ((((((EXP_C7 * y + EXP_C6) * y + EXP_C5) * y + EXP_C4) * y + EXP_C3) * y
        + EXP_C2)
        * y
        + EXP_C1)
        * y
        + 1.0;

    if itrunc < -126 {
        // Subnormal result range: build the scale 2^126 larger, divide, then
        // scale back down so the intermediate stays normal.
        let scaled = f32::from_bits(((itrunc + 253) as u32) << 23);
        (scaled / poly) * f32::MIN_POSITIVE
    } else {
        f32::from_bits(((itrunc + 127) as u32) << 23) / poly
    }
}

/// Natural exponential via [`exp2`].
#[inline]
pub fn exp_e(value: f32) -> f32 {
    exp2(value * consts::LOG2_E)
}

/// Base-2 logarithm, exponent/mantissa bit split plus an 8-term polynomial
/// on the mantissa. log2(0) = -inf, negative input yields NaN, +inf passes
/// through.
pub fn log2(value: f32) -> f32 {
    if is_nan(value) {
        return value;
    }
    if value < 0.0 {
        return f32::from_bits(0xFFC0_0000);
    }
    if value == 0.0 {
        return f32::NEG_INFINITY;
    }
    if is_infinite(value) {
        return f32::INFINITY;
    }

    let bits = value.to_bits();
    let raw_biased = bits & EXPONENT_MASK;
    let trailing = bits & TRAILING_MASK;

    let (exponent, trailing) = if raw_biased == 0 {
        // Subnormal: shift the leading significand bit up to the implicit
        // position and adjust the exponent to match.
        let shift = trailing.leading_zeros() as i32 - 8;
        (-126 - shift, (trailing << shift) & TRAILING_MASK)
    } else {
        ((raw_biased >> 23) as i32 - 127, trailing)
    };

    let y = f32::from_bits(0x3F80_0000 | trailing) - 1.0;
    let poly = (((((((LOG_C7 * y + LOG_C6) * y + LOG_C5) * y + LOG_C4) * y + LOG_C3) * y
        + LOG_C2)
        * y
        + LOG_C1)
        * y
        + LOG_C0)
        * y;
    poly + exponent as f32
}

/// Natural logarithm via [`log2`].
#[inline]
pub fn log_e(value: f32) -> f32 {
    log2(value) * consts::LN_2
}

/// `base` raised to `exponent`. Delegates to the platform `powf`; a general
/// pow has no profitable branchless formulation.
#[inline]
pub fn pow(base: f32, exponent: f32) -> f32 {
    base.powf(exponent)
}
