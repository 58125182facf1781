//! Round-table objective.

use crate::error::ScoringFailure;
use crate::relation::RelationTable;
use crate::search::{Score, ScoreFn};

/// Sum over every element of its relation toward both neighbours, with the
/// arrangement closed into a cycle.
///
/// Relations are read in the element's own direction: position `i`
/// contributes `relation(a[i], a[i-1]) + relation(a[i], a[i+1])`, indices
/// wrapping around. With a single element both neighbours are the element
/// itself. An empty arrangement scores zero.
///
/// A missing relation fails the arrangement unless a fallback value is set.
/// A total that overflows `S` fails it too.
#[derive(Debug, Clone, Copy)]
pub struct Circular<'a, S> {
    table: &'a RelationTable<S>,
    fallback: Option<S>,
}

impl<'a, S: Score> Circular<'a, S> {
    /// Scores cycles using `table` as the pairwise relation lookup.
    pub fn new(table: &'a RelationTable<S>) -> Self {
        Self {
            table,
            fallback: None,
        }
    }

    /// Uses `value` for missing relations instead of failing.
    pub fn with_fallback(mut self, value: S) -> Self {
        self.fallback = Some(value);
        self
    }

    fn lookup(&self, from: usize, to: usize) -> Result<S, ScoringFailure> {
        match (self.table.get(from, to), self.fallback) {
            (Some(value), _) | (None, Some(value)) => Ok(value),
            (None, None) => Err(ScoringFailure::MissingRelation { from, to }),
        }
    }
}

impl<S: Score> ScoreFn<usize> for Circular<'_, S> {
    type Score = S;

    fn score(&self, arrangement: &[usize]) -> Result<S, ScoringFailure> {
        let n = arrangement.len();
        let mut total = S::ZERO;
        for (i, &element) in arrangement.iter().enumerate() {
            let left = arrangement[(i + n - 1) % n];
            let right = arrangement[(i + 1) % n];
            for neighbour in [left, right] {
                total = total
                    .checked_add(self.lookup(element, neighbour)?)
                    .ok_or(ScoringFailure::Overflow)?;
            }
        }
        Ok(total)
    }
}
