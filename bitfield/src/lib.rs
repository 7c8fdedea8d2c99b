//! Arbitrary-length bit fields built from 64-bit words.
//!
//! Positions are signed and wrap around the field's length, so `-1` is the
//! last bit and `len()` is the first one again. Operations that change bits
//! return an [`Edit`]: by default a fresh copy of the field, or the field
//! itself once it has been switched to [`Mode::Mutable`].
//!
//! ```
//! use bitfield::BitField;
//!
//! let mut bf = BitField::new(3);
//! assert_eq!(bf.set([0, -1]).not().to_string(), "010");
//! // value mode: `bf` itself was not touched
//! assert_eq!(bf.count_ones(), 0);
//!
//! bf.mutable().set([0, -1]);
//! assert_eq!(bf.to_string(), "101");
//! ```
#![forbid(unsafe_code)]

mod edit;
mod error;
mod fmt;
mod len;
mod ops;
mod repr;
#[cfg(feature = "serde")]
mod serde_impl;
mod shift;

pub use bitword::{Word, WORD_BITS};
pub use edit::{Edit, Mode};
pub use error::{Error, Result};
pub use len::BitLen;
pub use repr::BitField;
