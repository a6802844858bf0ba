/// An iterator yielding only the first element of its source.
///
/// Created by [`head`] and [`first`].
#[derive(Debug, Clone)]
pub struct Head<I> {
    // None once the first element has been pulled
    iter: Option<I>,
}

impl<I> Iterator for Head<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // the source is released after one pull, so a second element is
        // never requested from it
        self.iter.take()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.iter {
            Some(iter) => {
                let (lower, upper) = iter.size_hint();
                (lower.min(1), Some(upper.map_or(1, |upper| upper.min(1))))
            }
            None => (0, Some(0)),
        }
    }
}

/// Yield the first element of `sequence`, then stop.
///
/// An empty sequence yields nothing.
pub fn head<S>(sequence: S) -> Head<S::IntoIter>
where
    S: IntoIterator,
{
    Head {
        iter: Some(sequence.into_iter()),
    }
}

/// Alias of [`head`].
pub fn first<S>(sequence: S) -> Head<S::IntoIter>
where
    S: IntoIterator,
{
    head(sequence)
}

/// An iterator yielding everything but the first element of its source.
///
/// Created by [`tail`] and [`rest`].
#[derive(Debug, Clone)]
pub struct Tail<I> {
    // None once the source reported its end
    iter: Option<I>,
    seen_first: bool,
}

impl<I> Iterator for Tail<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let iter = self.iter.as_mut()?;
        if !self.seen_first {
            self.seen_first = true;
            if iter.next().is_none() {
                self.iter = None;
                return None;
            }
        }
        let value = iter.next();
        if value.is_none() {
            self.iter = None;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(iter) = &self.iter else {
            return (0, Some(0));
        };
        let (lower, upper) = iter.size_hint();
        if self.seen_first {
            (lower, upper)
        } else {
            (
                lower.saturating_sub(1),
                upper.map(|upper| upper.saturating_sub(1)),
            )
        }
    }
}

/// Yield every element of `sequence` except the first.
///
/// The first element is skipped during the same traversal that produces
/// the rest, so this works on sources that can only be traversed once.
/// Empty and single element sequences yield nothing.
pub fn tail<S>(sequence: S) -> Tail<S::IntoIter>
where
    S: IntoIterator,
{
    Tail {
        iter: Some(sequence.into_iter()),
        seen_first: false,
    }
}

/// Alias of [`tail`].
pub fn rest<S>(sequence: S) -> Tail<S::IntoIter>
where
    S: IntoIterator,
{
    tail(sequence)
}
