//! Per-lane boolean mask
//!
//! Comparison operations on [`Vec4`](crate::Vec4) yield a [`Bool4`]: four
//! lanes that are either all ones (`0xFFFF_FFFF`, true) or all zeros (false).
//! Keeping masks in their own type instead of reinterpreted float lanes makes
//! the intent explicit while preserving the branchless AND/OR selection the
//! all-ones convention exists for.

use core::ops::{BitAnd, BitOr, BitXor, Not};

const TRUE_LANE: u32 = 0xFFFF_FFFF;
const FALSE_LANE: u32 = 0x0000_0000;

/// Four-lane boolean mask with all-ones/all-zeros lane encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bool4 {
    bits: [u32; 4],
}

impl Bool4 {
    /// All lanes true.
    pub const TRUE: Self = Self { bits: [TRUE_LANE; 4] };
    /// All lanes false.
    pub const FALSE: Self = Self { bits: [FALSE_LANE; 4] };

    #[inline]
    pub fn new(x: bool, y: bool, z: bool, w: bool) -> Self {
        #[inline]
        fn lane(b: bool) -> u32 {
            if b { TRUE_LANE } else { FALSE_LANE }
        }
        Self { bits: [lane(x), lane(y), lane(z), lane(w)] }
    }

    #[inline]
    pub fn splat(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }

    /// Raw lane encoding, usable directly as an AND/OR selection mask.
    #[inline]
    pub fn to_bits(self) -> [u32; 4] {
        self.bits
    }

    /// Rebuilds a mask from raw lanes. Each lane must already be all ones or
    /// all zeros.
    #[inline]
    pub fn from_bits(bits: [u32; 4]) -> Self {
        debug_assert!(
            bits.iter().all(|&b| b == TRUE_LANE || b == FALSE_LANE),
            "mask lanes must be all-ones or all-zeros"
        );
        Self { bits }
    }

    #[inline]
    pub fn lane(self, index: usize) -> bool {
        self.bits[index] == TRUE_LANE
    }

    #[inline]
    pub fn to_array(self) -> [bool; 4] {
        [self.lane(0), self.lane(1), self.lane(2), self.lane(3)]
    }

    /// `true` when every lane is set.
    #[inline]
    pub fn all(self) -> bool {
        self.bits == [TRUE_LANE; 4]
    }

    /// `true` when at least one lane is set.
    #[inline]
    pub fn any(self) -> bool {
        self.bits != [FALSE_LANE; 4]
    }

    /// `true` when no lane is set.
    #[inline]
    pub fn none(self) -> bool {
        !self.any()
    }

    /// `true` when at least one lane is clear.
    #[inline]
    pub fn any_false(self) -> bool {
        !self.all()
    }

    /// `true` when the first three lanes are set, ignoring w. Used by the
    /// three-component queries on [`Vec3`](crate::Vec3) promoted data.
    #[inline]
    pub fn all3(self) -> bool {
        self.bits[0] == TRUE_LANE && self.bits[1] == TRUE_LANE && self.bits[2] == TRUE_LANE
    }

    /// `true` when any of the first three lanes is set.
    #[inline]
    pub fn any3(self) -> bool {
        self.bits[0] == TRUE_LANE || self.bits[1] == TRUE_LANE || self.bits[2] == TRUE_LANE
    }
}

impl BitAnd for Bool4 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: [
                self.bits[0] & rhs.bits[0],
                self.bits[1] & rhs.bits[1],
                self.bits[2] & rhs.bits[2],
                self.bits[3] & rhs.bits[3],
            ],
        }
    }
}

impl BitOr for Bool4 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: [
                self.bits[0] | rhs.bits[0],
                self.bits[1] | rhs.bits[1],
                self.bits[2] | rhs.bits[2],
                self.bits[3] | rhs.bits[3],
            ],
        }
    }
}

impl BitXor for Bool4 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            bits: [
                self.bits[0] ^ rhs.bits[0],
                self.bits[1] ^ rhs.bits[1],
                self.bits[2] ^ rhs.bits[2],
                self.bits[3] ^ rhs.bits[3],
            ],
        }
    }
}

impl Not for Bool4 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self {
            bits: [!self.bits[0], !self.bits[1], !self.bits[2], !self.bits[3]],
        }
    }
}
