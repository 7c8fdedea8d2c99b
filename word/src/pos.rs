use crate::WORD_BITS;

/// Index of a word inside a sequence of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordPos;

/// Offset of a bit inside a single word, always in `0..WORD_BITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPos(u32);

impl BitPos {
    #[inline]
    pub const fn of_pos(pos: usize) -> Self {
        Self((pos % WORD_BITS) as u32)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1 << self.0
    }
}

impl WordPos {
    #[inline]
    pub const fn of_pos(pos: usize) -> usize {
        pos / WORD_BITS
    }
}
