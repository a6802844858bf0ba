#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A source that can only be traversed once.
///
/// Every traversal drains the same underlying buffer, so a second traversal
/// sees only what the first one left behind.
pub struct SinglePass<T> {
    items: RefCell<std::vec::IntoIter<T>>,
    traversals: Cell<usize>,
}

impl<T> SinglePass<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RefCell::new(items.into_iter()),
            traversals: Cell::new(0),
        }
    }

    pub fn traversals(&self) -> usize {
        self.traversals.get()
    }
}

pub struct SinglePassIter<'a, T> {
    source: &'a SinglePass<T>,
}

impl<T> Iterator for SinglePassIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.source.items.borrow_mut().next()
    }
}

impl<'a, T> IntoIterator for &'a SinglePass<T> {
    type Item = T;
    type IntoIter = SinglePassIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traversals.set(self.traversals.get() + 1);
        SinglePassIter { source: self }
    }
}

/// An iterator that counts every `next` call made on it, including the
/// ones that report the end.
pub struct Counted<I> {
    iter: I,
    pulls: Rc<Cell<usize>>,
}

impl<I> Counted<I> {
    pub fn new(iter: I) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        (
            Self {
                iter,
                pulls: pulls.clone(),
            },
            pulls,
        )
    }
}

impl<I> Iterator for Counted<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.iter.next()
    }
}
