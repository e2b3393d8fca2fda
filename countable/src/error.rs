use thiserror::Error;

use crate::Flags;

/// A violated precondition.
///
/// These are programming errors on the side of the caller: misordered or
/// out of bounds offsets handed to a container, or a result that would not
/// fit in memory. An operation that merely finds nothing is not an error;
/// it produces an empty countable value with a diagnosis instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("length {length} exceeds the maximum of {maximum} elements")]
    LengthExceeded { length: usize, maximum: usize },
    #[error("offsets must be in ascending order")]
    OffsetsNotAscending,
    #[error("offset {0} occurs more than once")]
    DuplicateOffset(usize),
    #[error("offset {offset} is out of bounds for length {length}")]
    OffsetOutOfBounds { offset: usize, length: usize },
    #[error("flags {requested} are not supported, the nearest supported flags are {granted}")]
    UnsupportedFlags { requested: Flags, granted: Flags },
}

pub type Result<T> = std::result::Result<T, Error>;
