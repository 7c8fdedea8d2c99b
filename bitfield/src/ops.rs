use core::hash::{Hash, Hasher};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

use bitword::{BitPos, Word, WORD_BITS};

use crate::{error::usage, BitField, Edit, Error, Result};

// per-bit
impl BitField {
    /// Reads the bit at `pos`; positions wrap around the length.
    ///
    /// A zero-length field has no bits, so this is always `false` there.
    pub fn get(&self, pos: isize) -> bool {
        if self.is_empty() {
            return false;
        }
        let (word, bit) = self.bit_len().address_of(pos);
        self.words()[word].get(bit)
    }

    fn with_bits(
        &mut self,
        positions: impl IntoIterator<Item = isize>,
        f: fn(Word, BitPos) -> Word,
    ) {
        if self.is_empty() {
            return;
        }
        let len = self.bit_len();
        let words = self.words_mut();
        for pos in positions {
            let (word, bit) = len.address_of(pos);
            words[word] = f(words[word], bit);
        }
    }

    /// Sets the bits at every position in `positions`.
    pub fn set(&mut self, positions: impl IntoIterator<Item = isize>) -> Edit<'_> {
        self.edit(|bf| bf.with_bits(positions, Word::set))
    }

    /// Clears the bits at every position in `positions`.
    pub fn clear(&mut self, positions: impl IntoIterator<Item = isize>) -> Edit<'_> {
        self.edit(|bf| bf.with_bits(positions, Word::clear))
    }

    /// Inverts the bits at every position in `positions`.
    pub fn flip(&mut self, positions: impl IntoIterator<Item = isize>) -> Edit<'_> {
        self.edit(|bf| bf.with_bits(positions, Word::flip))
    }
}

// whole field
impl BitField {
    pub fn set_all(&mut self) -> Edit<'_> {
        self.edit(|bf| {
            bf.words_mut().fill(Word::ONES);
            bf.clear_end();
        })
    }

    pub fn clear_all(&mut self) -> Edit<'_> {
        self.edit(|bf| bf.words_mut().fill(Word::ZERO))
    }

    /// Inverts every bit.
    pub fn not(&mut self) -> Edit<'_> {
        self.edit(|bf| {
            for word in bf.words_mut() {
                *word = !*word;
            }
            bf.clear_end();
        })
    }

    fn zip_with(&mut self, other: &BitField, f: impl Fn(&mut Word, Word)) {
        for (word, &other) in self.words_mut().iter_mut().zip(other.words()) {
            f(word, other)
        }
    }

    pub fn try_and(&mut self, other: &BitField) -> Result<Edit<'_>> {
        Error::check_len(self.len(), other.len())?;
        Ok(self.edit(|bf| bf.zip_with(other, |a, b| *a &= b)))
    }

    pub fn try_or(&mut self, other: &BitField) -> Result<Edit<'_>> {
        Error::check_len(self.len(), other.len())?;
        Ok(self.edit(|bf| bf.zip_with(other, |a, b| *a |= b)))
    }

    pub fn try_xor(&mut self, other: &BitField) -> Result<Edit<'_>> {
        Error::check_len(self.len(), other.len())?;
        Ok(self.edit(|bf| {
            bf.zip_with(other, |a, b| *a ^= b);
            bf.clear_end();
        }))
    }

    /// Bitwise AND with a field of the same length.
    ///
    /// # Panics
    ///
    /// If the lengths differ
    pub fn and(&mut self, other: &BitField) -> Edit<'_> {
        self.try_and(other).unwrap_or_else(|err| usage(err))
    }

    /// Bitwise OR with a field of the same length.
    ///
    /// # Panics
    ///
    /// If the lengths differ
    pub fn or(&mut self, other: &BitField) -> Edit<'_> {
        self.try_or(other).unwrap_or_else(|err| usage(err))
    }

    /// Bitwise XOR with a field of the same length.
    ///
    /// # Panics
    ///
    /// If the lengths differ
    pub fn xor(&mut self, other: &BitField) -> Edit<'_> {
        self.try_xor(other).unwrap_or_else(|err| usage(err))
    }

    /// Same length and same bits. The mode is not compared.
    pub fn equal(&self, other: &BitField) -> bool {
        self.len() == other.len() && self.words() == other.words()
    }

    pub fn count_ones(&self) -> usize {
        self.words().iter().map(|x| x.count_ones() as usize).sum()
    }

    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    pub fn is_all_set(&self) -> bool {
        self.count_ones() == self.len()
    }

    pub fn is_all_unset(&self) -> bool {
        self.words().iter().all(|&word| word == Word::ZERO)
    }

    /// Positions of the set bits, in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words().iter().enumerate().flat_map(|(i, &word)| {
            let mut bits = u64::from(word);
            core::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * WORD_BITS + bit)
            })
        })
    }
}

impl Eq for BitField {}
impl PartialEq for BitField {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Hash for BitField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.words().hash(state);
    }
}

macro_rules! binary_op {
    ($($trait:ident::$fn:ident, $assign_trait:ident::$assign_fn:ident => $method:ident, $op:tt;)*) => {$(
        impl $trait<&BitField> for &BitField {
            type Output = BitField;

            fn $fn(self, rhs: &BitField) -> BitField {
                if let Err(err) = Error::check_len(self.len(), rhs.len()) {
                    usage(err)
                }
                let mut ret = self.clone();
                ret.zip_with(rhs, |a, b| *a $op b);
                ret.clear_end();
                ret
            }
        }

        impl $assign_trait<&BitField> for BitField {
            fn $assign_fn(&mut self, rhs: &BitField) {
                let edit = self.$method(rhs);
                if let Edit::Detached(edited) = edit {
                    *self = edited;
                }
            }
        }
    )*};
}

binary_op! {
    BitAnd::bitand, BitAndAssign::bitand_assign => and, &=;
    BitOr::bitor, BitOrAssign::bitor_assign => or, |=;
    BitXor::bitxor, BitXorAssign::bitxor_assign => xor, ^=;
}

impl core::ops::Not for BitField {
    type Output = BitField;

    fn not(mut self) -> BitField {
        BitField::not(&mut self).into_owned()
    }
}
