use crate::error;

/// Occurrence checks: consume a sequence expecting a particular number of
/// elements.
pub trait Occurrence<A, E> {
    /// Exactly one element.
    fn one(&mut self) -> Result<A, E>;
    /// Zero or one element.
    fn option(&mut self) -> Result<Option<A>, E>;
    /// Any number of elements, collected.
    fn many(&mut self) -> Result<Vec<A>, E>;
}

impl<I> Occurrence<I::Item, error::Error> for I
where
    I: Iterator,
{
    fn one(&mut self) -> Result<I::Item, error::Error> {
        if let Some(one) = self.next() {
            if self.next().is_none() {
                Ok(one)
            } else {
                Err(error::Error::MoreThanOne)
            }
        } else {
            Err(error::Error::Empty)
        }
    }

    fn option(&mut self) -> Result<Option<I::Item>, error::Error> {
        if let Some(one) = self.next() {
            if self.next().is_none() {
                Ok(Some(one))
            } else {
                Err(error::Error::MoreThanOne)
            }
        } else {
            Ok(None)
        }
    }

    fn many(&mut self) -> Result<Vec<I::Item>, error::Error> {
        Ok(self.collect::<Vec<_>>())
    }
}

/// Get the single element of a sequence.
///
/// At most two elements are pulled, so this terminates on infinite
/// sources too.
pub fn one<S>(sequence: S) -> error::Result<S::Item>
where
    S: IntoIterator,
{
    sequence.into_iter().one()
}

/// Get the element of a sequence that has zero or one elements.
pub fn option<S>(sequence: S) -> error::Result<Option<S::Item>>
where
    S: IntoIterator,
{
    sequence.into_iter().option()
}
