//! Lazily evaluated sequence combinators.
//!
//! Every combinator takes anything that implements [`IntoIterator`], turns
//! it into an iterator exactly once, and returns a new iterator that pulls
//! from it on demand. Nothing is computed ahead of the consumer and nothing
//! is buffered beyond the single element a combinator needs for its own
//! bookkeeping. This means the combinators work on infinite sources and on
//! sources that can only be traversed once.
//!
//! ```
//! use lazyseq::{all, map, reduce};
//!
//! let sums: Vec<i64> = reduce(|a, b| a + b, [1, 2, 3, 4]).collect();
//! assert_eq!(sums, vec![3, 6, 10]);
//!
//! let even: Vec<bool> = all([2, 4, 5, 6], |x| x % 2 == 0).collect();
//! assert_eq!(even, vec![true, true, false, false]);
//!
//! let squares: Vec<u64> = map(|x| x * x, 1..).take(3).collect();
//! assert_eq!(squares, vec![1, 4, 9]);
//! ```
//!
//! The same combinators are available as methods on [`Sequence`]:
//!
//! ```
//! use lazyseq::Sequence;
//!
//! let v: Vec<u32> = Sequence::new(1u32..)
//!     .filter(|x| *x % 3 == 0)
//!     .map(|x| x * 10)
//!     .head()
//!     .collect();
//! assert_eq!(v, vec![30]);
//! ```

pub mod error;
pub mod occurrence;
pub mod sequence;

pub use occurrence::{one, option};

pub use sequence::{
    all, filter, first, head, head_value, init, last, last_value, map, reduce, rest, tail,
    try_all, try_filter, try_map, try_reduce, Sequence,
};
