use crate::error;

use super::accumulate::{init, last, reduce, Init, Last, Reduce};
use super::all::{all, All};
use super::fallible::{try_all, try_filter, try_reduce, TryAll, TryFilter, TryReduce};
use super::iter::{head_value, last_value};
use super::producer::{head, tail, Head, Tail};
use super::transform::{filter, map, Filter, Map};

/// A lazy sequence.
///
/// This wraps an iterator so the combinators can be chained as methods.
/// The methods have the same names as the free functions in this module
/// and take precedence over the [`Iterator`] methods of the same name, so
/// `Sequence::new(s).last()` is the lazy [`last`](super::last), not
/// [`Iterator::last`].
///
/// A `Sequence` is itself an iterator and can be consumed like any other.
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    iter: I,
}

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Wrap a sequence. `into_iter` is called on it exactly once, here.
    pub fn new<S>(sequence: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: sequence.into_iter(),
        }
    }

    /// Unwrap the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }

    /// See [`map`](super::map).
    pub fn map<F, U>(self, f: F) -> Sequence<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Sequence::new(map(f, self.iter))
    }

    /// See [`filter`](super::filter).
    pub fn filter<P>(self, predicate: P) -> Sequence<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Sequence::new(filter(predicate, self.iter))
    }

    /// See [`head`](super::head).
    pub fn head(self) -> Sequence<Head<I>> {
        Sequence::new(head(self.iter))
    }

    /// See [`first`](super::first).
    pub fn first(self) -> Sequence<Head<I>> {
        self.head()
    }

    /// See [`tail`](super::tail).
    pub fn tail(self) -> Sequence<Tail<I>> {
        Sequence::new(tail(self.iter))
    }

    /// See [`rest`](super::rest).
    pub fn rest(self) -> Sequence<Tail<I>> {
        self.tail()
    }

    /// See [`reduce`](super::reduce).
    pub fn reduce<F>(self, f: F) -> Sequence<Reduce<I, F>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        Sequence::new(reduce(f, self.iter))
    }

    /// See [`last`](super::last).
    pub fn last(self) -> Sequence<Last<I>> {
        Sequence::new(last(self.iter))
    }

    /// See [`init`](super::init).
    pub fn init(self) -> Sequence<Init<I>> {
        Sequence::new(init(self.iter))
    }

    /// See [`all`](super::all).
    pub fn all<F>(self, f: F) -> Sequence<All<I, F>>
    where
        F: FnMut(I::Item) -> bool,
    {
        Sequence::new(all(self.iter, f))
    }

    /// See [`try_map`](super::try_map).
    pub fn try_map<F, U, E>(self, f: F) -> Sequence<Map<I, F>>
    where
        F: FnMut(I::Item) -> Result<U, E>,
    {
        Sequence::new(map(f, self.iter))
    }

    /// See [`try_filter`](super::try_filter).
    pub fn try_filter<P, E>(self, predicate: P) -> Sequence<TryFilter<I, P>>
    where
        P: FnMut(&I::Item) -> Result<bool, E>,
    {
        Sequence::new(try_filter(predicate, self.iter))
    }

    /// See [`try_reduce`](super::try_reduce).
    pub fn try_reduce<F, E>(self, f: F) -> Sequence<TryReduce<I, F>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item) -> Result<I::Item, E>,
    {
        Sequence::new(try_reduce(f, self.iter))
    }

    /// See [`try_all`](super::try_all).
    pub fn try_all<F, E>(self, f: F) -> Sequence<TryAll<I, F>>
    where
        F: FnMut(I::Item) -> Result<bool, E>,
    {
        Sequence::new(try_all(self.iter, f))
    }

    /// See [`head_value`](super::head_value).
    pub fn head_value(self) -> error::Result<I::Item> {
        head_value(self.iter)
    }

    /// See [`last_value`](super::last_value).
    pub fn last_value(self) -> error::Result<I::Item> {
        last_value(self.iter)
    }
}

impl<I> From<I> for Sequence<I>
where
    I: Iterator,
{
    fn from(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> Iterator for Sequence<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
