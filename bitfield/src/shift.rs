use bitword::{Word, WORD_BITS};

use crate::{BitField, Edit};

impl BitField {
    /// Shifts every word towards higher positions by `count` bits in place.
    fn shift_up(&mut self, count: usize) {
        let (skip, delta) = (count / WORD_BITS, (count % WORD_BITS) as i32);
        let words = self.words_mut();

        // high to low, so every source word is read before it is overwritten
        for i in (0..words.len()).rev() {
            let src = i.checked_sub(skip).map_or(Word::ZERO, |j| words[j]);
            let (shifted, carry) = src.shift2(delta);
            words[i] = shifted;
            if let Some(next) = words.get_mut(i + 1) {
                *next |= carry;
            }
        }

        self.clear_end();
    }

    /// Shifts every word towards lower positions by `count` bits in place.
    fn shift_down(&mut self, count: usize) {
        let (skip, delta) = (count / WORD_BITS, (count % WORD_BITS) as i32);
        let words = self.words_mut();

        // low to high, the mirror image of `shift_up`
        for i in 0..words.len() {
            let src = words.get(i + skip).copied().unwrap_or(Word::ZERO);
            let (shifted, carry) = src.shift2(-delta);
            words[i] = shifted;
            if let Some(prev) = i.checked_sub(1) {
                words[prev] |= carry;
            }
        }
    }

    fn shift_in_place(&mut self, count: isize) {
        if count.unsigned_abs() >= self.len() {
            self.words_mut().fill(Word::ZERO);
        } else if count > 0 {
            self.shift_up(count.unsigned_abs());
        } else if count < 0 {
            self.shift_down(count.unsigned_abs());
        }
    }

    /// Logical shift by `count` bits: positive towards higher positions,
    /// negative towards lower ones.
    ///
    /// Bits shifted past either end are lost and vacated bits are zero, so a
    /// shift by `len()` or more clears the field.
    pub fn shift(&mut self, count: isize) -> Edit<'_> {
        self.edit(|bf| bf.shift_in_place(count))
    }

    /// `count` bits starting at `pos`, as a new field.
    ///
    /// `pos` wraps like any other position, `count` is capped at `len()`.
    /// Bits requested past the end of `self` come back as zero.
    pub fn mid(&self, pos: isize, count: usize) -> BitField {
        if count == 0 {
            return BitField::new(0);
        }

        let count = count.min(self.len());
        let pos = self.bit_len().normalize(pos);

        let mut window = self.clone();
        window.shift_in_place(-(pos as isize));
        window.resize(count)
    }

    /// The lowest `count` bits.
    pub fn left(&self, count: usize) -> BitField {
        self.mid(0, count)
    }

    /// The highest `count` bits.
    ///
    /// A `count` past `len()` wraps the start position around, the same way
    /// `mid(len - count, count)` would.
    pub fn right(&self, count: usize) -> BitField {
        match self.len() {
            0 => BitField::new(0),
            len => self.mid((len - count % len) as isize, count),
        }
    }

    /// Concatenation: the bits of `self` followed by the bits of `other`.
    pub fn append(&self, other: &BitField) -> BitField {
        if other.is_empty() {
            return self.clone();
        }

        let len = self.len() + other.len();
        let mut ret = other.resize(len);
        ret.shift_in_place(self.len() as isize);
        ret.or(&self.resize(len)).into_owned()
    }

    /// Circular shift by `amount` bits: positive towards higher positions,
    /// negative towards lower ones. Bits leaving one end enter at the other.
    pub fn rotate(&mut self, amount: isize) -> Edit<'_> {
        let amount = self.bit_len().normalize(amount);
        if amount == 0 {
            return self.edit(|_| ());
        }

        tracing::trace!(len = self.len(), amount, "rotating bitfield");
        let low = self.left(self.len() - amount);
        let high = self.right(amount);
        let rotated = high.append(&low);

        self.edit(|bf| rotated.copy_into(bf))
    }
}
