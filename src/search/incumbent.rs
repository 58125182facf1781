//! Running best for an extremum search.
//!
//! [`Incumbent`] folds scored arrangements into the best score seen so far
//! and the arrangements that reached it first. Two incumbents built over
//! consecutive slices of an enumeration can be merged, left slice first,
//! into exactly what a single pass over both slices would have produced.
//! Parallel search relies on this.

use super::config::SearchConfig;
use super::types::{Direction, Score};
use crate::error::{Result, SearchError};

/// Final outcome of an extremum search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T, S> {
    /// Best score found.
    pub best_score: S,

    /// Arrangements achieving `best_score`, first encountered first.
    ///
    /// Never empty; holds at most [`SearchConfig::max_ties`] entries.
    pub arrangements: Vec<Vec<T>>,

    /// Number of arrangements achieving `best_score`, including ties that
    /// were not retained.
    pub tie_count: usize,

    /// Number of arrangements scored successfully.
    pub evaluated: usize,

    /// Number of arrangements whose scoring failed.
    pub skipped: usize,
}

impl<T, S> SearchResult<T, S> {
    /// The first arrangement that reached the best score.
    pub fn best(&self) -> &[T] {
        self.arrangements.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Best-so-far accumulator.
#[derive(Debug, Clone)]
pub struct Incumbent<T, S> {
    direction: Direction,
    max_ties: usize,
    best: Option<S>,
    arrangements: Vec<Vec<T>>,
    tie_count: usize,
    evaluated: usize,
    skipped: usize,
}

impl<T, S: Score> Incumbent<T, S> {
    /// Creates an empty incumbent for the given configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            direction: config.direction,
            max_ties: config.max_ties.max(1),
            best: None,
            arrangements: Vec::new(),
            tie_count: 0,
            evaluated: 0,
            skipped: 0,
        }
    }

    /// Best score so far, if any arrangement has been scored.
    pub fn best_score(&self) -> Option<S> {
        self.best
    }

    /// Folds in one successfully scored arrangement.
    ///
    /// Returns `true` if the arrangement set a new best score.
    pub fn offer(&mut self, score: S, arrangement: Vec<T>) -> bool {
        self.evaluated += 1;
        match self.best {
            Some(best) if self.direction.is_better(&score, &best) => {
                self.install(score, arrangement);
                true
            }
            Some(best) if score == best => {
                self.tie_count += 1;
                if self.arrangements.len() < self.max_ties {
                    self.arrangements.push(arrangement);
                }
                false
            }
            Some(_) => false,
            None => {
                self.install(score, arrangement);
                true
            }
        }
    }

    /// Records an arrangement that could not be scored.
    pub fn reject(&mut self) {
        self.skipped += 1;
    }

    fn install(&mut self, score: S, arrangement: Vec<T>) {
        self.best = Some(score);
        self.arrangements.clear();
        self.arrangements.push(arrangement);
        self.tie_count = 1;
    }

    /// Merges an incumbent built over a later slice of the same enumeration.
    ///
    /// Ties keep `self`'s arrangements ahead of `later`'s.
    pub fn merge(&mut self, later: Self) {
        self.evaluated += later.evaluated;
        self.skipped += later.skipped;

        let Some(theirs) = later.best else {
            return;
        };

        match self.best {
            Some(ours) if self.direction.is_better(&theirs, &ours) => {
                self.best = Some(theirs);
                self.arrangements = later.arrangements;
                self.tie_count = later.tie_count;
            }
            Some(ours) if theirs == ours => {
                self.tie_count += later.tie_count;
                let room = self.max_ties - self.arrangements.len();
                self.arrangements
                    .extend(later.arrangements.into_iter().take(room));
            }
            Some(_) => {}
            None => {
                self.best = Some(theirs);
                self.arrangements = later.arrangements;
                self.tie_count = later.tie_count;
            }
        }
    }

    /// Converts the accumulated state into a search result.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoScorableArrangement`] if nothing was ever scored.
    pub fn into_result(self) -> Result<SearchResult<T, S>> {
        match self.best {
            Some(best_score) => Ok(SearchResult {
                best_score,
                arrangements: self.arrangements,
                tie_count: self.tie_count,
                evaluated: self.evaluated,
                skipped: self.skipped,
            }),
            None => Err(SearchError::NoScorableArrangement {
                skipped: self.skipped,
            }),
        }
    }
}
