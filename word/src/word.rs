use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::{BitPos, WORD_BITS};

/// A fixed-width block of [`WORD_BITS`] bits.
///
/// Bit offset `0` is the least significant bit of the backing `u64`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Word(u64);

impl Word {
    pub const ZERO: Self = Self(0);
    pub const ONES: Self = Self(u64::MAX);

    /// A word with the lowest `bits` bits set.
    ///
    /// # Panics
    ///
    /// If `bits > WORD_BITS`
    #[inline]
    pub const fn low_mask(bits: usize) -> Self {
        assert!(bits <= WORD_BITS, "mask wider than a word");
        match bits {
            WORD_BITS => Self::ONES,
            x => Self(!(u64::MAX << x)),
        }
    }

    #[inline]
    pub const fn get(self, pos: BitPos) -> bool {
        self.0 & pos.mask() != 0
    }

    #[inline]
    #[must_use]
    pub const fn set(self, pos: BitPos) -> Self {
        Self(self.0 | pos.mask())
    }

    #[inline]
    #[must_use]
    pub const fn clear(self, pos: BitPos) -> Self {
        Self(self.0 & !pos.mask())
    }

    #[inline]
    #[must_use]
    pub const fn flip(self, pos: BitPos) -> Self {
        Self(self.0 ^ pos.mask())
    }

    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn count_zeros(self) -> u32 {
        self.0.count_zeros()
    }

    /// Shifts by `count` bits, positive towards higher offsets.
    ///
    /// # Panics
    ///
    /// If `count` is not in `-WORD_BITS + 1..WORD_BITS`
    #[inline]
    #[must_use]
    pub const fn shift(self, count: i32) -> Self {
        self.shift2(count).0
    }

    /// Shifts by `count` bits and also returns the bits that fell off the end.
    ///
    /// The overflow word is already positioned for its neighbour: for a
    /// positive `count` the bits that left the top sit at the bottom of the
    /// overflow (ready to be or-ed into the next higher word), for a negative
    /// `count` the bits that left the bottom sit at the top.
    ///
    /// # Panics
    ///
    /// If `count` is not in `-WORD_BITS + 1..WORD_BITS`
    #[must_use]
    pub const fn shift2(self, count: i32) -> (Self, Self) {
        const W: i32 = WORD_BITS as i32;
        assert!(-W < count && count < W, "shift out of word range");

        match count {
            0 => (self, Self::ZERO),
            1.. => (
                Self(self.0 << count),
                Self(self.0 >> (W - count)),
            ),
            _ => (
                Self(self.0 >> -count),
                Self(self.0 << (W + count)),
            ),
        }
    }
}

impl From<u64> for Word {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Word> for u64 {
    #[inline]
    fn from(value: Word) -> Self {
        value.0
    }
}

impl Not for Word {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

macro_rules! bitwise {
    ($($trait:ident::$fn:ident, $assign_trait:ident::$assign_fn:ident => $op:tt;)*) => {$(
        impl $trait for Word {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                Self(self.0 $op rhs.0)
            }
        }

        impl $assign_trait for Word {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = *self $op rhs
            }
        }
    )*};
}

bitwise! {
    BitAnd::bitand, BitAndAssign::bitand_assign => &;
    BitOr::bitor, BitOrAssign::bitor_assign => |;
    BitXor::bitxor, BitXorAssign::bitxor_assign => ^;
}

impl Word {
    /// Writes the lowest `n` bits as `'0'`/`'1'`, offset 0 first.
    ///
    /// # Panics
    ///
    /// If `n > WORD_BITS`
    pub fn write_bits<W: fmt::Write>(self, out: &mut W, n: usize) -> fmt::Result {
        assert!(n <= WORD_BITS, "more bits than a word holds");
        for bit in 0..n {
            out.write_char(if self.get(BitPos::of_pos(bit)) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Renders all [`WORD_BITS`] bits as `'0'`/`'1'`, offset 0 first.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_bits(f, WORD_BITS)
    }
}
