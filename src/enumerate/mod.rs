//! Arrangement enumeration.
//!
//! Lazy, restartable generators for every ordering of a collection
//! ([`Permutations`]) and every fixed-size subset ([`Combinations`]).
//! Both borrow the source slice and never mutate it; each arrangement is
//! a freshly built `Vec`.
//!
//! Enumeration never fails. The only error is a caller asking for subsets
//! larger than the collection.

mod combinations;
mod permutations;

pub use combinations::{all_combinations, binomial, combinations, Combinations};
pub use permutations::{factorial, Permutations};
