use core::ops::{Deref, DerefMut};

use crate::BitField;

/// Whether bit-changing operations copy the field or write through it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every edit works on a fresh copy; the receiver is never changed.
    #[default]
    Value,
    /// Edits are applied to the receiver's own storage.
    Mutable,
}

/// The result of a bit-changing operation.
///
/// Either the receiver itself (in [`Mode::Mutable`]) or a detached copy that
/// carries the edit (in [`Mode::Value`]). Both dereference to a [`BitField`],
/// so further operations can be chained directly.
#[derive(Debug)]
pub enum Edit<'a> {
    InPlace(&'a mut BitField),
    Detached(BitField),
}

impl Edit<'_> {
    /// Returns `true` if the edit was written through the receiver.
    pub fn is_in_place(&self) -> bool {
        matches!(self, Self::InPlace(_))
    }

    /// Extracts an owned field, cloning it if the edit was done in place.
    pub fn into_owned(self) -> BitField {
        match self {
            Self::InPlace(bf) => bf.clone(),
            Self::Detached(bf) => bf,
        }
    }
}

impl Deref for Edit<'_> {
    type Target = BitField;

    #[inline]
    fn deref(&self) -> &BitField {
        match self {
            Self::InPlace(bf) => bf,
            Self::Detached(bf) => bf,
        }
    }
}

impl DerefMut for Edit<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut BitField {
        match self {
            Self::InPlace(bf) => bf,
            Self::Detached(bf) => bf,
        }
    }
}

impl From<Edit<'_>> for BitField {
    fn from(edit: Edit<'_>) -> Self {
        edit.into_owned()
    }
}

impl PartialEq<BitField> for Edit<'_> {
    fn eq(&self, other: &BitField) -> bool {
        self.equal(other)
    }
}

impl BitField {
    /// Picks the storage an edit works on: `self` in mutable mode, a deep copy otherwise.
    fn target(&mut self) -> Edit<'_> {
        match self.mode() {
            Mode::Mutable => {
                tracing::trace!(len = self.len(), "editing bitfield in place");
                Edit::InPlace(self)
            }
            Mode::Value => {
                tracing::trace!(len = self.len(), "editing a copy of bitfield");
                Edit::Detached(self.clone())
            }
        }
    }

    /// Runs `f` on the edit target and returns it.
    ///
    /// This is the only place where the value/mutable distinction is made.
    pub(crate) fn edit(&mut self, f: impl FnOnce(&mut BitField)) -> Edit<'_> {
        let mut target = self.target();
        f(&mut *target);
        target
    }
}
