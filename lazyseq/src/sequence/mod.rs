//! The sequence combinators.
//!
//! Each combinator is a function taking a sequence (anything
//! [`IntoIterator`]) and returning an iterator adaptor that evaluates
//! lazily. The adaptors can be composed freely; [`Sequence`] wraps them to
//! allow method chaining.
mod accumulate;
mod all;
mod fallible;
mod iter;
mod producer;
mod sequence_core;
mod transform;

pub use accumulate::{init, last, reduce, Init, Last, Reduce};
pub use all::{all, All};
pub use fallible::{try_all, try_filter, try_map, try_reduce, TryAll, TryFilter, TryReduce};
pub use iter::{head_value, last_value};
pub use producer::{first, head, rest, tail, Head, Tail};
pub use sequence_core::Sequence;
pub use transform::{filter, map, Filter, Map};
