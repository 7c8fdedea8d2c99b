use core::fmt;
use core::str::FromStr;

use bitword::{BitPos, Word, WordPos, WORD_BITS};

use crate::{BitField, BitLen, Error, Mode};

/// One `'0'`/`'1'` per bit, position 0 first.
impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.len();
        for word in self.words() {
            let n = rest.min(WORD_BITS);
            word.write_bits(f, n)?;
            rest -= n;
        }
        Ok(())
    }
}

impl fmt::Debug for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BitField");
        s.field("len", &self.len());
        if self.mode() == Mode::Mutable {
            s.field("mode", &self.mode());
        }
        s.field("bits", &format_args!("{self}")).finish()
    }
}

/// Parses the output of [`Display`](fmt::Display).
impl FromStr for BitField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let len = BitLen::new(s.len());
        let mut words = vec![Word::ZERO; len.words()];

        for (index, found) in s.chars().enumerate() {
            match found {
                '0' => (),
                '1' => {
                    let word = &mut words[WordPos::of_pos(index)];
                    *word = word.set(BitPos::of_pos(index));
                }
                _ => return Err(Error::InvalidDigit { index, found }),
            }
        }

        Ok(BitField::from_words(words, len))
    }
}
