//! Element interning and pairwise relation lookup.
//!
//! Input parsing assigns every distinct named element a dense index once
//! ([`Interner`]), and records pairwise values keyed by index pairs
//! ([`RelationTable`]). Score functions then borrow the table as plain data.
//! [`RelationGraph`] bundles both for the parsing phase.

mod graph;
mod interner;
mod table;

pub use graph::RelationGraph;
pub use interner::Interner;
pub use table::RelationTable;
