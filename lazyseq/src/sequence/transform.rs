/// An iterator applying a function to each element of its source.
///
/// Created by [`map`].
#[derive(Clone)]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F> std::fmt::Debug for Map<I, F>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

impl<I, F, U> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Yield `f(v)` for each `v` in `sequence`.
///
/// `f` is called exactly once per element, at the moment that element is
/// pulled.
pub fn map<S, F, U>(f: F, sequence: S) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    Map {
        iter: sequence.into_iter(),
        f,
    }
}

/// An iterator yielding the elements of its source that match a predicate.
///
/// Created by [`filter`].
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> std::fmt::Debug for Filter<I, P>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        // may pull any number of elements before one matches
        self.iter.find(&mut self.predicate)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Yield only the elements of `sequence` for which `predicate` is true.
///
/// A single pull can consume an unbounded number of source elements when
/// matches are sparse, but non-matching elements are dropped immediately
/// and never accumulated.
pub fn filter<S, P>(predicate: P, sequence: S) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        iter: sequence.into_iter(),
        predicate,
    }
}
