use bitword::{BitPos, Word, WordPos, WORD_BITS};

use crate::{error::usage, BitLen, Error, Mode, Result};

/// A bit vector of arbitrary length.
///
/// Bits live in a sequence of [`Word`]s; bits of the last word past `len()`
/// are kept at zero, so whole-word comparisons and population counts are exact.
pub struct BitField {
    words: Vec<Word>,
    len: BitLen,
    mode: Mode,
}

impl BitField {
    /// Creates an all-zero field of `len` bits.
    pub fn new(len: usize) -> Self {
        let len = BitLen::new(len);
        Self {
            words: vec![Word::ZERO; len.words()],
            len,
            mode: Mode::Value,
        }
    }

    /// Like [`BitField::new`], but takes a signed length and rejects negative values.
    pub fn try_new(len: isize) -> Result<Self> {
        let len = BitLen::try_from(len)?;
        Ok(Self::new(len.get()))
    }

    /// Builds a field with one bit per item, the first item at position 0.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        let bits = bits.into_iter();
        let mut words = Vec::with_capacity(bits.size_hint().0.div_ceil(WORD_BITS));
        let mut len = 0;

        for bit in bits {
            let word = WordPos::of_pos(len);
            if word == words.len() {
                words.push(Word::ZERO);
            }
            if bit {
                words[word] = words[word].set(BitPos::of_pos(len));
            }
            len += 1;
        }

        Self::from_words(words, BitLen::new(len))
    }

    /// `words` must hold exactly `len.words()` words with a clear tail.
    pub(crate) fn from_words(words: Vec<Word>, len: BitLen) -> Self {
        debug_assert_eq!(words.len(), len.words());
        Self {
            words,
            len,
            mode: Mode::Value,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len.get()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn bit_len(&self) -> BitLen {
        self.len
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches to [`Mode::Mutable`] for good: later edits write through `self`.
    pub fn mutable(&mut self) -> &mut Self {
        if self.mode != Mode::Mutable {
            tracing::debug!(len = self.len(), "bitfield switched to mutable mode");
            self.mode = Mode::Mutable;
        }
        self
    }

    /// Owned version of [`BitField::mutable`].
    pub fn into_mutable(mut self) -> Self {
        self.mutable();
        self
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// Zeroes the bits of the last word that lie past `len()`.
    pub(crate) fn clear_end(&mut self) {
        let mask = self.len.excess_bits_mask();
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }

    /// Copies every bit of `self` into `dest`, which must have the same length.
    ///
    /// # Panics
    ///
    /// If the lengths differ
    pub fn copy_into(&self, dest: &mut BitField) {
        self.try_copy_into(dest).unwrap_or_else(|err| usage(err))
    }

    pub fn try_copy_into(&self, dest: &mut BitField) -> Result {
        Error::check_len(self.len(), dest.len())?;
        dest.words.copy_from_slice(&self.words);
        Ok(())
    }

    /// Returns a copy resized to `new_len` bits.
    ///
    /// Bits past `new_len` are dropped, newly added bits are zero.
    pub fn resize(&self, new_len: usize) -> BitField {
        tracing::trace!(from = self.len(), to = new_len, "resizing bitfield");

        let mut ret = BitField::new(new_len);
        let n = ret.words.len().min(self.words.len());
        ret.words[..n].copy_from_slice(&self.words[..n]);
        if new_len < self.len() {
            ret.clear_end();
        }
        ret
    }
}

/// Deep copy. The copy always starts out in [`Mode::Value`].
impl Clone for BitField {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            len: self.len,
            mode: Mode::Value,
        }
    }
}

impl Default for BitField {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FromIterator<bool> for BitField {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bits(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        for len in [0, 1, 63, 64, 65, 129] {
            let bf = BitField::new(len);
            assert_eq!(bf.len(), len);
            assert_eq!(bf.words().len(), BitLen::new(len).words());
            assert_eq!(bf.count_ones(), 0);
            assert_eq!(bf.mode(), Mode::Value);
        }
    }

    #[test]
    fn test_try_new() {
        assert_eq!(BitField::try_new(12).map(|bf| bf.len()), Ok(12));
        assert_eq!(
            BitField::try_new(-3).map(|bf| bf.len()),
            Err(Error::NegativeLength(-3))
        );
    }

    #[test]
    fn test_from_bits() {
        let bf = BitField::from_bits([true, false, true, true]);
        assert_eq!(bf.len(), 4);
        assert_eq!(bf.to_string(), "1011");

        let bf: BitField = (0..130).map(|i| i % 64 == 0).collect();
        assert_eq!(bf.len(), 130);
        assert_eq!(bf.words().len(), 3);
        assert_eq!(bf.count_ones(), 3);

        assert!(BitField::from_bits(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_mutable_is_sticky() {
        let mut bf = BitField::new(3);
        bf.mutable();
        bf.mutable();
        assert_eq!(bf.mode(), Mode::Mutable);
        bf.set_all();
        assert_eq!(bf.mode(), Mode::Mutable);
    }

    #[test]
    fn test_clone_is_value_mode() {
        let bf = BitField::new(65).into_mutable();
        let clone = bf.clone();
        assert_eq!(clone.mode(), Mode::Value);
        assert!(clone.equal(&bf));
    }

    #[test]
    fn test_resize() {
        assert_eq!(BitField::new(4).resize(0).len(), 0);
        assert_eq!(BitField::new(10).set_all().resize(6).count_ones(), 6);
        assert!(BitField::new(27).set([0, -1]).resize(65).get(26));
        assert_eq!(BitField::new(65).set([-1]).resize(45).count_ones(), 0);
        assert_eq!(BitField::new(65).set_all().resize(40).count_ones(), 40);
        assert_eq!(BitField::new(64).set_all().resize(200).count_ones(), 64);
    }

    #[test]
    fn test_resize_keeps_source() {
        let mut bf = BitField::new(10).into_mutable();
        bf.set_all();
        let small = bf.resize(3);
        assert_eq!(small.len(), 3);
        assert_eq!(bf.len(), 10);
        assert_eq!(bf.count_ones(), 10);
    }

    #[test]
    fn test_copy_into() {
        let mut dest = BitField::new(65);
        BitField::new(65).set([0, -1]).copy_into(&mut dest);
        assert_eq!(dest.count_ones(), 2);
        assert!(dest.get(-1));
    }

    #[test]
    fn test_try_copy_into_mismatch() {
        let mut dest = BitField::new(65);
        assert_eq!(
            BitField::new(5).try_copy_into(&mut dest),
            Err(Error::MismatchedLen { left: 5, right: 65 })
        );
    }

    #[test]
    #[should_panic(expected = "bitfield lengths differ: 5 != 65")]
    fn test_copy_into_mismatch() {
        let mut dest = BitField::new(65);
        BitField::new(5).copy_into(&mut dest);
    }
}
