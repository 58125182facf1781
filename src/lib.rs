//! Exhaustive arrangement search with pluggable scoring.
//!
//! Small combinatorial puzzles (shortest route through every city, best
//! round-table seating, which containers hold an exact volume) share one
//! shape: enumerate every ordering or subset of a handful of elements,
//! score each one, keep the best. This crate provides the pieces:
//!
//! - **Enumeration** ([`enumerate`]): lazy, restartable generators for all
//!   permutations and all k-subsets of a slice, in a fixed deterministic
//!   order.
//! - **Extremum search** ([`search`]): scores candidates with a
//!   caller-supplied [`ScoreFn`](search::ScoreFn), skips candidates that
//!   cannot be scored, and returns the best (maximum or minimum) with
//!   first-encountered tie-breaking. Permutation searches can run on rayon
//!   with results identical to a sequential run.
//! - **Relations** ([`relation`]): interning of named elements to dense
//!   indices and pairwise lookup tables keyed by index pairs.
//! - **Objectives** ([`scoring`]): open-path distance and round-table
//!   neighbour sums over a relation table.
//! - **Container selection** ([`containers`]): exact-volume subset search.
//!
//! # Example
//!
//! ```
//! use u_arrange::relation::RelationGraph;
//! use u_arrange::scoring::LinearPath;
//! use u_arrange::search::{ExtremumSearch, SearchConfig};
//!
//! let mut routes: RelationGraph<String, u32> = RelationGraph::new();
//! routes.insert_symmetric("London", "Dublin", 464).unwrap();
//! routes.insert_symmetric("London", "Belfast", 518).unwrap();
//! routes.insert_symmetric("Dublin", "Belfast", 141).unwrap();
//!
//! let path = LinearPath::new(routes.table());
//! let shortest =
//!     ExtremumSearch::over_permutations(&routes.indices(), &path, &SearchConfig::minimize())
//!         .unwrap();
//! assert_eq!(shortest.best_score, 605);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): rayon-backed permutation search
//! - `serde`: `Serialize`/`Deserialize` for [`search::SearchConfig`] and
//!   [`search::Direction`]
//!
//! Searches emit `tracing` events at debug and trace level; install a
//! subscriber to see them.

pub mod containers;
pub mod enumerate;
mod error;
pub mod relation;
pub mod scoring;
pub mod search;

pub use error::{Result, ScoringFailure, SearchError};
