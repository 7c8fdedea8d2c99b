/// Usage errors reported by [`BitField`](crate::BitField) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("bitfield length cannot be negative, got {0}")]
    NegativeLength(isize),
    #[error("bitfield lengths differ: {left} != {right}")]
    MismatchedLen { left: usize, right: usize },
    #[error("invalid bit {found:?} at index {index}, expected '0' or '1'")]
    InvalidDigit { index: usize, found: char },
}

pub type Result<T = (), E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn check_len(left: usize, right: usize) -> Result {
        if left == right {
            Ok(())
        } else {
            Err(Self::MismatchedLen { left, right })
        }
    }
}

/// Logs and panics with a usage error; the panicking counterpart of every `try_*` method.
#[track_caller]
#[cold]
pub(crate) fn usage(err: Error) -> ! {
    tracing::error!(%err, "bitfield usage error");
    panic!("{err}")
}
