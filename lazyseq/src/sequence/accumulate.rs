use super::producer::head;

/// An iterator yielding the running left fold of its source.
///
/// Created by [`reduce`].
#[derive(Clone)]
pub struct Reduce<I, F>
where
    I: Iterator,
{
    iter: I,
    f: F,
    accumulator: Option<I::Item>,
    seeded: bool,
}

impl<I, F> std::fmt::Debug for Reduce<I, F>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reduce")
            .field("iter", &self.iter)
            .field("accumulator", &self.accumulator)
            .field("seeded", &self.seeded)
            .finish()
    }
}

impl<I, F> Iterator for Reduce<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.seeded {
            self.seeded = true;
            // the seed is the head of the very traversal the rest is folded
            // over; the source is never asked for a second traversal
            self.accumulator = head(self.iter.by_ref()).next();
        }
        let accumulator = self.accumulator.take()?;
        let value = self.iter.next()?;
        let accumulator = (self.f)(accumulator, value);
        self.accumulator = Some(accumulator.clone());
        Some(accumulator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.seeded {
            let (lower, upper) = self.iter.size_hint();
            (
                lower.saturating_sub(1),
                upper.map(|upper| upper.saturating_sub(1)),
            )
        } else if self.accumulator.is_some() {
            self.iter.size_hint()
        } else {
            (0, Some(0))
        }
    }
}

/// Yield the running left fold of `sequence` under `f`.
///
/// The first element seeds the accumulator and is not itself yielded.
/// Every later element `v` replaces the accumulator with `f(accumulator, v)`
/// and yields the new accumulator. So `[1, 2, 3, 4]` under addition yields
/// `3, 6, 10`. An empty sequence yields nothing, and so does a sequence with
/// a single element: its seed is never folded.
pub fn reduce<S, F>(f: F, sequence: S) -> Reduce<S::IntoIter, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Reduce {
        iter: sequence.into_iter(),
        f,
        accumulator: None,
        seeded: false,
    }
}

/// An iterator yielding the final element of its source.
///
/// Created by [`last`].
#[derive(Debug, Clone)]
pub struct Last<I> {
    // None once drained
    iter: Option<I>,
}

impl<I> Iterator for Last<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let iter = self.iter.take()?;
        let mut last = None;
        for value in iter {
            last = Some(value);
        }
        tracing::trace!(found = last.is_some(), "last: source drained");
        last
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

/// Yield only the final element of `sequence`.
///
/// The first pull drains the whole source, so this never yields on an
/// infinite sequence. An empty sequence yields nothing.
pub fn last<S>(sequence: S) -> Last<S::IntoIter>
where
    S: IntoIterator,
{
    Last {
        iter: Some(sequence.into_iter()),
    }
}

/// An iterator yielding everything but the final element of its source.
///
/// Created by [`init`].
#[derive(Debug, Clone)]
pub struct Init<I>
where
    I: Iterator,
{
    iter: I,
    held: Option<I::Item>,
    started: bool,
}

impl<I> Iterator for Init<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.started {
            self.started = true;
            self.held = self.iter.next();
        }
        let held = self.held.take()?;
        // the held element is only released once we know it isn't the last
        let current = self.iter.next()?;
        self.held = Some(current);
        Some(held)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if !self.started {
            (
                lower.saturating_sub(1),
                upper.map(|upper| upper.saturating_sub(1)),
            )
        } else if self.held.is_some() {
            (lower, upper)
        } else {
            (0, Some(0))
        }
    }
}

/// Yield every element of `sequence` except the last, in order.
///
/// One element of lookahead is held back at any time. Empty and single
/// element sequences yield nothing.
pub fn init<S>(sequence: S) -> Init<S::IntoIter>
where
    S: IntoIterator,
{
    Init {
        iter: sequence.into_iter(),
        held: None,
        started: false,
    }
}
