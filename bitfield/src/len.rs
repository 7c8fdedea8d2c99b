use bitword::{BitPos, Word, WordPos, WORD_BITS};

use crate::Error;

/// The number of addressable bits in a [`BitField`](crate::BitField).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitLen(usize);

impl BitLen {
    pub const ZERO: Self = Self::new(0);

    pub const fn new(x: usize) -> Self {
        Self(x)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of words needed to hold this many bits.
    #[inline]
    pub const fn words(self) -> usize {
        self.get() / WORD_BITS + (0 != self.get() % WORD_BITS) as usize
    }

    /// Number of used bits in the last word, `WORD_BITS` if it is full.
    #[inline]
    pub const fn excess_bits(self) -> usize {
        match self.get() % WORD_BITS {
            0 => WORD_BITS,
            x => x,
        }
    }

    /// Mask of the used bits in the last word.
    #[inline]
    pub const fn excess_bits_mask(self) -> Word {
        Word::low_mask(self.excess_bits())
    }

    /// Maps any position onto `0..len` by wrapping around, `0` for an empty length.
    ///
    /// Negative positions count from the end, so `-1` is the last bit.
    #[inline]
    pub const fn normalize(self, pos: isize) -> usize {
        match self.get() {
            0 => 0,
            len => pos.rem_euclid(len as isize) as usize,
        }
    }

    /// Word index and bit offset of `pos` after normalization.
    #[inline]
    pub const fn address_of(self, pos: isize) -> (usize, BitPos) {
        let pos = self.normalize(pos);
        (WordPos::of_pos(pos), BitPos::of_pos(pos))
    }
}

impl From<usize> for BitLen {
    #[inline]
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl TryFrom<isize> for BitLen {
    type Error = Error;

    fn try_from(value: isize) -> Result<Self, Error> {
        usize::try_from(value)
            .map(Self::new)
            .map_err(|_| Error::NegativeLength(value))
    }
}
