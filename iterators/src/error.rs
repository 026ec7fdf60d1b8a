use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error that can be returned by the lists and their cursors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index outside of the populated part of a list was requested.
    #[error("index {index} is out of bounds for a list of length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A cursor was advanced past its last element.
    #[error("cursor is exhausted")]
    Exhausted,

    /// An extensible list was asked to allocate blocks that can hold nothing.
    #[error("block capacity must be greater than zero")]
    ZeroBlockCapacity,
}
