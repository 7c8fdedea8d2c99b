#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

mod pos;
mod word;

pub use pos::{BitPos, WordPos};
pub use word::Word;

pub const WORD_BITS: usize = u64::BITS as usize;
