//! Named elements plus their relation table.

use std::borrow::Borrow;
use std::hash::Hash;

use tracing::debug;

use super::interner::Interner;
use super::table::RelationTable;
use crate::error::Result;
use crate::search::Score;

/// Relation table addressed by element keys while it is being built.
///
/// Parsers feed `(from, to, value)` triples in; searches read
/// [`RelationGraph::indices`] and [`RelationGraph::table`] out.
///
/// # Examples
///
/// ```
/// use u_arrange::relation::RelationGraph;
///
/// let mut routes: RelationGraph<String, u32> = RelationGraph::new();
/// routes.insert_symmetric("London", "Dublin", 464).unwrap();
/// routes.insert_symmetric("London", "Belfast", 518).unwrap();
/// routes.insert_symmetric("Dublin", "Belfast", 141).unwrap();
///
/// assert_eq!(routes.len(), 3);
/// assert_eq!(routes.value("Belfast", "Dublin"), Some(141));
/// ```
#[derive(Debug, Clone)]
pub struct RelationGraph<K, S> {
    interner: Interner<K>,
    table: RelationTable<S>,
}

impl<K, S> Default for RelationGraph<K, S> {
    fn default() -> Self {
        Self {
            interner: Interner::default(),
            table: RelationTable::default(),
        }
    }
}

impl<K, S> RelationGraph<K, S>
where
    K: Eq + Hash + Clone,
    S: Score,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `key` without adding relations.
    pub fn add_element<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let index = self.interner.intern(key);
        self.table.grow(self.interner.len());
        index
    }

    /// Defines the directed relation `from -> to`.
    ///
    /// # Errors
    ///
    /// [`SearchError::DuplicateRelation`](crate::SearchError::DuplicateRelation)
    /// if the pair was already defined.
    pub fn insert<Q>(&mut self, from: &Q, to: &Q, value: S) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let a = self.add_element(from);
        let b = self.add_element(to);
        self.table.set(a, b, value)
    }

    /// Defines the same relation in both directions.
    ///
    /// # Errors
    ///
    /// [`SearchError::DuplicateRelation`](crate::SearchError::DuplicateRelation)
    /// if either direction was already defined. Neither direction is written
    /// in that case.
    pub fn insert_symmetric<Q>(&mut self, a: &Q, b: &Q, value: S) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let a = self.add_element(a);
        let b = self.add_element(b);
        self.table.set_symmetric(a, b, value)
    }

    /// Adds an element related to every existing element by `value`, in
    /// both directions.
    ///
    /// With a zero `value` this is the neutral guest who is indifferent to
    /// everybody and whom everybody is indifferent to.
    ///
    /// # Errors
    ///
    /// [`SearchError::DuplicateRelation`](crate::SearchError::DuplicateRelation)
    /// if `key` is already related to some element in either direction. No
    /// relation is written in that case.
    pub fn add_observer<Q>(&mut self, key: &Q, value: S) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let observer = self.add_element(key);
        let others: Vec<usize> = (0..self.len()).filter(|&i| i != observer).collect();
        for &other in &others {
            self.table.ensure_vacant(observer, other)?;
            self.table.ensure_vacant(other, observer)?;
        }
        for other in others {
            self.table.set_symmetric(observer, other, value)?;
        }
        debug!(
            event = "observer_added",
            index = observer,
            relations = 2 * (self.len() - 1),
        );
        Ok(observer)
    }

    /// Relation value between two keys, if both are known and related.
    pub fn value<Q>(&self, from: &Q, to: &Q) -> Option<S>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let a = self.interner.index_of(from)?;
        let b = self.interner.index_of(to)?;
        self.table.get(a, b)
    }

    /// Element indices `0..len`, ready to be permuted.
    pub fn indices(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    /// Returns `true` if no element was added.
    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// The key/index mapping.
    pub fn interner(&self) -> &Interner<K> {
        &self.interner
    }

    /// The index-addressed relation values.
    pub fn table(&self) -> &RelationTable<S> {
        &self.table
    }
}
