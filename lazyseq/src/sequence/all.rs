/// An iterator yielding the running conjunction of a predicate over its
/// source.
///
/// Created by [`all`].
#[derive(Clone)]
pub struct All<I, F> {
    // None once the source reported its end
    iter: Option<I>,
    f: F,
    conjunction: bool,
}

impl<I, F> std::fmt::Debug for All<I, F>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("All")
            .field("iter", &self.iter)
            .field("conjunction", &self.conjunction)
            .finish()
    }
}

impl<I, F> Iterator for All<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> bool,
{
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let Some(value) = self.iter.as_mut()?.next() else {
            self.iter = None;
            return None;
        };
        // once false, `f` is no longer consulted but the source keeps being
        // pulled, one element per output
        self.conjunction = self.conjunction && (self.f)(value);
        Some(self.conjunction)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter
            .as_ref()
            .map_or((0, Some(0)), |iter| iter.size_hint())
    }
}

/// Yield the running conjunction of `f` over `sequence`.
///
/// Output `i` is true when `f` held for every element up to and including
/// element `i`. One boolean is yielded per source element: the sequence
/// does not stop when the conjunction turns false, it keeps yielding
/// `false`. Use [`Iterator::all`] for a single short-circuiting answer.
pub fn all<S, F>(sequence: S, f: F) -> All<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> bool,
{
    All {
        iter: Some(sequence.into_iter()),
        f,
        conjunction: true,
    }
}
