//! Dense pairwise relation table.

use crate::error::{Result, ScoringFailure, SearchError};
use crate::search::Score;

/// Directed relation values between `n` indexed elements.
///
/// Stored row-major as an `n × n` grid of optional values. The value from
/// `a` to `b` need not equal the value from `b` to `a`.
///
/// # Examples
///
/// ```
/// use u_arrange::relation::RelationTable;
///
/// let mut distances = RelationTable::new(3);
/// distances.set_symmetric(0, 1, 464).unwrap();
/// distances.set_symmetric(1, 2, 141).unwrap();
/// assert_eq!(distances.get(1, 0), Some(464));
/// assert_eq!(distances.get(0, 2), None);
/// assert!(distances.relation(0, 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTable<S> {
    n: usize,
    values: Vec<Option<S>>,
}

impl<S> Default for RelationTable<S> {
    fn default() -> Self {
        Self {
            n: 0,
            values: Vec::new(),
        }
    }
}

impl<S: Score> RelationTable<S> {
    /// Creates a table for `n` elements with no relations defined.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            values: vec![None; grid_size(n)],
        }
    }

    /// Number of elements the table covers.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` if the table covers no elements.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Extends the table to cover at least `n` elements.
    ///
    /// Existing relations keep their indices. Shrinking is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    pub fn grow(&mut self, n: usize) {
        if n <= self.n {
            return;
        }
        let mut values = vec![None; grid_size(n)];
        for row in 0..self.n {
            let old = &self.values[row * self.n..(row + 1) * self.n];
            values[row * n..row * n + self.n].copy_from_slice(old);
        }
        self.n = n;
        self.values = values;
    }

    /// Defines the relation from `from` to `to`, growing the table if needed.
    ///
    /// # Errors
    ///
    /// [`SearchError::DuplicateRelation`] if the pair already has a value.
    ///
    /// # Panics
    ///
    /// Panics if the grown table would not fit in memory, i.e. an index
    /// near `usize::MAX`.
    pub fn set(&mut self, from: usize, to: usize, value: S) -> Result<()> {
        self.ensure_vacant(from, to)?;
        self.grow(from.max(to).saturating_add(1));
        self.values[from * self.n + to] = Some(value);
        Ok(())
    }

    /// Defines the same value in both directions.
    ///
    /// Either both directions are written or, on error, neither is.
    ///
    /// # Errors
    ///
    /// [`SearchError::DuplicateRelation`] if either direction already has a
    /// value.
    pub fn set_symmetric(&mut self, a: usize, b: usize, value: S) -> Result<()> {
        self.ensure_vacant(a, b)?;
        self.ensure_vacant(b, a)?;
        self.set(a, b, value)?;
        if a != b {
            self.set(b, a, value)?;
        }
        Ok(())
    }

    /// Fails if the pair already has a value.
    ///
    /// # Errors
    ///
    /// [`SearchError::DuplicateRelation`] naming the occupied pair.
    pub fn ensure_vacant(&self, from: usize, to: usize) -> Result<()> {
        match self.get(from, to) {
            Some(_) => Err(SearchError::DuplicateRelation { from, to }),
            None => Ok(()),
        }
    }

    /// Relation from `from` to `to`, if defined.
    pub fn get(&self, from: usize, to: usize) -> Option<S> {
        if from >= self.n || to >= self.n {
            return None;
        }
        self.values[from * self.n + to]
    }

    /// Relation from `from` to `to`, as a scoring step.
    ///
    /// # Errors
    ///
    /// [`ScoringFailure::MissingRelation`] if the pair has no value.
    pub fn relation(&self, from: usize, to: usize) -> std::result::Result<S, ScoringFailure> {
        self.get(from, to)
            .ok_or(ScoringFailure::MissingRelation { from, to })
    }

    /// Number of defined (directed) relations.
    pub fn defined(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

fn grid_size(n: usize) -> usize {
    match n.checked_mul(n) {
        Some(size) => size,
        None => panic!("relation table for {n} elements overflows usize"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_values() {
        let mut table = RelationTable::new(2);
        table.set(0, 1, 54).unwrap();
        table.set(1, 0, -79).unwrap();
        assert_eq!(table.get(0, 1), Some(54));
        assert_eq!(table.get(1, 0), Some(-79));
        assert_eq!(table.defined(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut table = RelationTable::new(2);
        table.set_symmetric(0, 1, 7).unwrap();
        let err = table.set(1, 0, 9).unwrap_err();
        assert_eq!(err, SearchError::DuplicateRelation { from: 1, to: 0 });
        assert_eq!(table.get(1, 0), Some(7));
    }

    #[test]
    fn test_grow_preserves_values() {
        let mut table = RelationTable::new(2);
        table.set(0, 1, 3).unwrap();
        table.set(1, 1, 4).unwrap();
        table.set(3, 0, 5).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.get(0, 1), Some(3));
        assert_eq!(table.get(1, 1), Some(4));
        assert_eq!(table.get(3, 0), Some(5));
        assert_eq!(table.get(2, 2), None);
    }

    #[test]
    fn test_out_of_range_is_missing() {
        let table: RelationTable<i32> = RelationTable::new(1);
        assert_eq!(table.get(0, 5), None);
        assert_eq!(
            table.relation(5, 0),
            Err(ScoringFailure::MissingRelation { from: 5, to: 0 })
        );
    }

    #[test]
    fn test_self_relation_symmetric() {
        let mut table = RelationTable::new(1);
        table.set_symmetric(0, 0, 2).unwrap();
        assert_eq!(table.get(0, 0), Some(2));
    }

    #[test]
    fn test_failed_symmetric_leaves_table_unchanged() {
        let mut table = RelationTable::new(2);
        table.set(0, 1, 1).unwrap();
        let before = table.clone();

        let err = table.set_symmetric(1, 0, 9).unwrap_err();
        assert_eq!(err, SearchError::DuplicateRelation { from: 0, to: 1 });
        assert_eq!(table.get(1, 0), None);
        assert_eq!(table, before);
    }

    #[test]
    fn test_failed_set_does_not_grow() {
        let mut table = RelationTable::new(2);
        table.set(1, 1, 4).unwrap();
        assert!(table.set_symmetric(1, 1, 5).is_err());
        assert!(table.ensure_vacant(1, 1).is_err());
        assert!(table.ensure_vacant(5, 0).is_ok());
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1, 1), Some(4));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_oversized_index_panics() {
        let mut table: RelationTable<i32> = RelationTable::new(1);
        let _ = table.set(usize::MAX, 0, 1);
    }
}
