use thiserror::Error;

/// Errors raised by the library itself.
///
/// The lazy combinators never fail on their own: an empty source simply
/// yields nothing, and errors from user functions are passed through
/// untouched. These errors only come from the eager accessors that insist
/// on a particular number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The sequence had no elements where at least one was required.
    #[error("sequence is empty")]
    Empty,
    /// The sequence had more than one element where at most one was allowed.
    #[error("sequence has more than one element")]
    MoreThanOne,
}

pub type Result<T> = std::result::Result<T, Error>;
