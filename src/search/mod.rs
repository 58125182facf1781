//! Exhaustive extremum search.
//!
//! Scores every candidate arrangement with a caller-supplied objective and
//! reduces to the best score under a chosen [`Direction`]. Candidates whose
//! scoring fails are skipped; the search only fails when none can be scored.
//!
//! # Core Traits
//!
//! - [`Score`]: totally ordered, summable score values
//! - [`ScoreFn`]: the objective, implemented by plain closures
//!
//! # Key Types
//!
//! - [`SearchConfig`]: direction, tie retention, parallelism
//! - [`ExtremumSearch`]: runs the search over any candidate stream, or over
//!   permutations and combinations directly
//! - [`SearchResult`]: best score, winning arrangements and counters
//!
//! # Ties
//!
//! Among arrangements with equal scores, the one enumerated first wins.
//! Parallel runs reproduce this exactly.

mod config;
mod incumbent;
mod runner;
mod types;

pub use config::SearchConfig;
pub use incumbent::{Incumbent, SearchResult};
pub use runner::{ExtremumSearch, SearchOutcome};
pub use types::{Direction, Score, ScoreFn};
