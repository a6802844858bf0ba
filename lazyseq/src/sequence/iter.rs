use crate::error;

use super::accumulate::last;
use super::producer::head;

/// Get the first element of a sequence, or [`error::Error::Empty`].
///
/// Only the first element is pulled.
pub fn head_value<S>(sequence: S) -> error::Result<S::Item>
where
    S: IntoIterator,
{
    head(sequence).next().ok_or(error::Error::Empty)
}

/// Get the final element of a sequence, or [`error::Error::Empty`].
///
/// The whole sequence is pulled, so this does not return for an infinite
/// sequence.
pub fn last_value<S>(sequence: S) -> error::Result<S::Item>
where
    S: IntoIterator,
{
    last(sequence).next().ok_or(error::Error::Empty)
}
