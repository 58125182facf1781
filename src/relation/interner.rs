//! Stable dense indices for named elements.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Assigns each distinct key a dense index, in first-seen order.
///
/// Interning happens once while parsing input. Everything downstream
/// (relation tables, arrangements, scoring) works with the indices.
///
/// # Examples
///
/// ```
/// use u_arrange::relation::Interner;
///
/// let mut names: Interner<String> = Interner::new();
/// let alice = names.intern("Alice");
/// let bob = names.intern("Bob");
/// assert_eq!(names.intern("Alice"), alice);
/// assert_eq!((alice, bob), (0, 1));
/// assert_eq!(names.key(bob).map(String::as_str), Some("Bob"));
/// ```
#[derive(Debug, Clone)]
pub struct Interner<K> {
    indices: HashMap<K, usize>,
    keys: Vec<K>,
}

impl<K> Default for Interner<K> {
    fn default() -> Self {
        Self {
            indices: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Interner<K> {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `key`, assigning the next free one if unseen.
    pub fn intern<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(&index) = self.indices.get(key) {
            return index;
        }
        let index = self.keys.len();
        let owned = key.to_owned();
        self.indices.insert(owned.clone(), index);
        self.keys.push(owned);
        index
    }

    /// Index of an already interned key.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.get(key).copied()
    }

    /// Key interned at `index`.
    pub fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// All keys, ordered by index.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Maps an arrangement of indices back to keys.
    ///
    /// Returns `None` if any index was never interned.
    pub fn resolve(&self, arrangement: &[usize]) -> Option<Vec<&K>> {
        arrangement.iter().map(|&i| self.key(i)).collect()
    }

    /// Number of interned keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if nothing was interned yet.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
