// Variants of the combinators for user functions that return `Result`.
// Errors are passed on to the consumer as items, exactly as the user
// function returned them.

use super::producer::head;
use super::transform::{map, Map};

/// Yield `f(v)` for each `v` in `sequence`, where `f` can fail.
///
/// This is [`map`] with the result type spelled out: an error for one
/// element doesn't affect the elements after it.
pub fn try_map<S, F, U, E>(f: F, sequence: S) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<U, E>,
{
    map(f, sequence)
}

/// An iterator filtering its source with a fallible predicate.
///
/// Created by [`try_filter`].
#[derive(Clone)]
pub struct TryFilter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> std::fmt::Debug for TryFilter<I, P>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryFilter").field("iter", &self.iter).finish()
    }
}

impl<I, P, E> Iterator for TryFilter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.iter.next()?;
            match (self.predicate)(&value) {
                Ok(true) => return Some(Ok(value)),
                Ok(false) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Yield the elements of `sequence` for which `predicate` returns
/// `Ok(true)`.
///
/// When `predicate` fails for an element, the error is yielded in place of
/// that element and filtering continues with the next one.
pub fn try_filter<S, P, E>(predicate: P, sequence: S) -> TryFilter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    TryFilter {
        iter: sequence.into_iter(),
        predicate,
    }
}

/// An iterator yielding the running left fold of its source under a
/// fallible function.
///
/// Created by [`try_reduce`].
#[derive(Clone)]
pub struct TryReduce<I, F>
where
    I: Iterator,
{
    iter: I,
    f: F,
    accumulator: Option<I::Item>,
    seeded: bool,
}

impl<I, F> std::fmt::Debug for TryReduce<I, F>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryReduce")
            .field("iter", &self.iter)
            .field("accumulator", &self.accumulator)
            .field("seeded", &self.seeded)
            .finish()
    }
}

impl<I, F, E> Iterator for TryReduce<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> Result<I::Item, E>,
{
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.seeded {
            self.seeded = true;
            self.accumulator = head(self.iter.by_ref()).next();
        }
        let accumulator = self.accumulator.take()?;
        let value = self.iter.next()?;
        match (self.f)(accumulator, value) {
            Ok(accumulator) => {
                self.accumulator = Some(accumulator.clone());
                Some(Ok(accumulator))
            }
            Err(e) => {
                // the accumulator was consumed by the failed call; nothing
                // more can be folded
                tracing::trace!("try_reduce: user function failed, ending sequence");
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.seeded {
            let (_, upper) = self.iter.size_hint();
            (0, upper.map(|upper| upper.saturating_sub(1)))
        } else if self.accumulator.is_some() {
            let (_, upper) = self.iter.size_hint();
            (0, upper)
        } else {
            (0, Some(0))
        }
    }
}

/// Yield the running left fold of `sequence` under a fallible `f`.
///
/// Behaves like [`reduce`](super::reduce) while `f` succeeds, yielding each
/// new accumulator as `Ok`. The first error is yielded as is, after which
/// the sequence ends.
pub fn try_reduce<S, F, E>(f: F, sequence: S) -> TryReduce<S::IntoIter, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> Result<S::Item, E>,
{
    TryReduce {
        iter: sequence.into_iter(),
        f,
        accumulator: None,
        seeded: false,
    }
}

/// An iterator yielding the running conjunction of a fallible predicate.
///
/// Created by [`try_all`].
#[derive(Clone)]
pub struct TryAll<I, F> {
    iter: I,
    f: F,
    // None after an error or once the source reported its end
    conjunction: Option<bool>,
}

impl<I, F> std::fmt::Debug for TryAll<I, F>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryAll")
            .field("iter", &self.iter)
            .field("conjunction", &self.conjunction)
            .finish()
    }
}

impl<I, F, E> Iterator for TryAll<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<bool, E>,
{
    type Item = Result<bool, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let conjunction = self.conjunction?;
        let Some(value) = self.iter.next() else {
            self.conjunction = None;
            return None;
        };
        if !conjunction {
            return Some(Ok(false));
        }
        match (self.f)(value) {
            Ok(holds) => {
                self.conjunction = Some(holds);
                Some(Ok(holds))
            }
            Err(e) => {
                self.conjunction = None;
                tracing::trace!("try_all: user function failed, ending sequence");
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.conjunction {
            Some(false) => self.iter.size_hint(),
            Some(true) => {
                let (lower, upper) = self.iter.size_hint();
                (lower.min(1), upper)
            }
            None => (0, Some(0)),
        }
    }
}

/// Yield the running conjunction of a fallible `f` over `sequence`.
///
/// Behaves like [`all`](super::all) while `f` succeeds. The first error is
/// yielded as is, after which the sequence ends. Once the conjunction is
/// false `f` is no longer called, so no error can occur after that point.
pub fn try_all<S, F, E>(sequence: S, f: F) -> TryAll<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<bool, E>,
{
    TryAll {
        iter: sequence.into_iter(),
        f,
        conjunction: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::super::producer::tests::Resuming;
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Odd(i32);

    fn halve(x: i32) -> Result<i32, Odd> {
        if x % 2 == 0 {
            Ok(x / 2)
        } else {
            Err(Odd(x))
        }
    }

    #[test]
    fn test_try_map() {
        assert_eq!(
            try_map(halve, [2, 3, 4]).collect::<Vec<_>>(),
            vec![Ok(1), Err(Odd(3)), Ok(2)]
        );
    }

    #[test]
    fn test_try_map_collect_result() {
        let r: Result<Vec<_>, _> = try_map(halve, [2, 4, 6]).collect();
        assert_eq!(r, Ok(vec![1, 2, 3]));
        let r: Result<Vec<_>, _> = try_map(halve, [2, 5, 6]).collect();
        assert_eq!(r, Err(Odd(5)));
    }

    #[test]
    fn test_try_filter() {
        let f = try_filter(
            |x: &i32| if *x < 0 { Err(Odd(*x)) } else { Ok(*x > 1) },
            [1, 2, -1, 3],
        );
        assert_eq!(f.collect::<Vec<_>>(), vec![Ok(2), Err(Odd(-1)), Ok(3)]);
    }

    #[test]
    fn test_try_reduce() {
        let r = try_reduce(|a: i32, b| a.checked_add(b).ok_or("overflow"), [1, 2, 3]);
        assert_eq!(r.collect::<Vec<_>>(), vec![Ok(3), Ok(6)]);
    }

    #[test]
    fn test_try_reduce_ends_after_error() {
        let r = try_reduce(
            |a: u8, b| a.checked_add(b).ok_or("overflow"),
            [200, 50, 10, 1],
        );
        assert_eq!(r.collect::<Vec<_>>(), vec![Ok(250), Err("overflow")]);
    }

    #[test]
    fn test_try_reduce_singleton() {
        assert_eq!(try_reduce(|a: i32, b| Ok::<_, Odd>(a + b), [1]).next(), None);
    }

    #[test]
    fn test_try_all() {
        let a = try_all([2, 4, 5, 6], |x: i32| Ok::<_, Odd>(x % 2 == 0));
        assert_eq!(
            a.collect::<Vec<_>>(),
            vec![Ok(true), Ok(true), Ok(false), Ok(false)]
        );
    }

    #[test]
    fn test_try_all_ends_after_error() {
        let a = try_all([2, -1, 4], |x: i32| {
            if x < 0 {
                Err(Odd(x))
            } else {
                Ok(x % 2 == 0)
            }
        });
        assert_eq!(a.collect::<Vec<_>>(), vec![Ok(true), Err(Odd(-1))]);
    }

    #[test]
    fn test_try_all_stays_ended() {
        let mut a = try_all(Resuming::new(vec![Some(2), None, Some(3)]), |x| {
            Ok::<_, Odd>(x % 2 == 0)
        });
        assert_eq!(a.next(), Some(Ok(true)));
        assert_eq!(a.next(), None);
        assert_eq!(a.next(), None);
    }

    #[test]
    fn test_try_all_takes_elements_by_value() {
        let words = vec![String::from("ab"), String::from("")];
        let a = try_all(words, |word: String| Ok::<_, Odd>(!word.into_bytes().is_empty()));
        assert_eq!(a.collect::<Vec<_>>(), vec![Ok(true), Ok(false)]);
    }

    #[test]
    fn test_try_all_no_error_after_false() {
        let a = try_all([1, -1], |x: i32| {
            if x < 0 {
                Err(Odd(x))
            } else {
                Ok(x % 2 == 0)
            }
        });
        assert_eq!(a.collect::<Vec<_>>(), vec![Ok(false), Ok(false)]);
    }
}
