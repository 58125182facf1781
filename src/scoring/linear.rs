//! Open-path objective.

use crate::error::ScoringFailure;
use crate::relation::RelationTable;
use crate::search::{Score, ScoreFn};

/// Sum of relations between consecutive elements, front to back.
///
/// The path is open: the last element is not connected back to the first.
/// A missing relation between any consecutive pair makes the whole
/// arrangement unscorable, as does a total that overflows `S`. Arrangements
/// of zero or one element score zero.
///
/// # Examples
///
/// ```
/// use u_arrange::relation::RelationTable;
/// use u_arrange::scoring::LinearPath;
/// use u_arrange::search::ScoreFn;
///
/// let mut distances = RelationTable::new(3);
/// distances.set_symmetric(0, 1, 10).unwrap();
/// distances.set_symmetric(1, 2, 5).unwrap();
///
/// let path = LinearPath::new(&distances);
/// assert_eq!(path.score(&[0, 1, 2]), Ok(15));
/// assert!(path.score(&[1, 0, 2]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinearPath<'a, S> {
    table: &'a RelationTable<S>,
}

impl<'a, S: Score> LinearPath<'a, S> {
    /// Scores paths using `table` as the pairwise distance lookup.
    pub fn new(table: &'a RelationTable<S>) -> Self {
        Self { table }
    }
}

impl<S: Score> ScoreFn<usize> for LinearPath<'_, S> {
    type Score = S;

    fn score(&self, arrangement: &[usize]) -> Result<S, ScoringFailure> {
        let mut total = S::ZERO;
        for pair in arrangement.windows(2) {
            total = total
                .checked_add(self.table.relation(pair[0], pair[1])?)
                .ok_or(ScoringFailure::Overflow)?;
        }
        Ok(total)
    }
}
