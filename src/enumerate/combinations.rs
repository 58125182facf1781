//! Lazy k-subset generator.
//!
//! Subsets are produced in ascending lexicographic order of their index
//! vectors. After emitting a subset, the rightmost index that can still move
//! is advanced and every index to its right is reset to follow it
//! consecutively. Enumeration ends when no index can move.

use std::iter::FusedIterator;

use crate::error::{Result, SearchError};

/// Returns `C(n, k)`, or `None` on overflow. `k > n` gives `Some(0)`.
///
/// # Examples
///
/// ```
/// use u_arrange::enumerate::binomial;
///
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(5, 0), Some(1));
/// assert_eq!(binomial(3, 4), Some(0));
/// ```
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut acc: u64 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    Some(acc)
}

/// Iterator over every `k`-element subset of a borrowed slice.
///
/// Elements keep their relative order from the source slice. `k = 0` yields
/// a single empty subset.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    /// Creates the generator, rejecting `k > items.len()`.
    pub fn new(items: &'a [T], k: usize) -> Result<Self> {
        if k > items.len() {
            return Err(SearchError::InvalidSubsetSize { k, n: items.len() });
        }
        Ok(Self {
            items,
            indices: (0..k).collect(),
            done: false,
        })
    }

    /// Subset size.
    pub fn k(&self) -> usize {
        self.indices.len()
    }

    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let offset = self.items.len() - k;

        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + offset) else {
            return false;
        };

        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let subset = self.indices.iter().map(|&i| self.items[i].clone()).collect();
        if !self.advance() {
            self.done = true;
        }
        Some(subset)
    }
}

impl<T: Clone> FusedIterator for Combinations<'_, T> {}

/// Returns every `k`-element subset of `items`.
///
/// # Errors
///
/// [`SearchError::InvalidSubsetSize`] when `k > items.len()`.
///
/// # Examples
///
/// ```
/// use u_arrange::enumerate::combinations;
///
/// let pairs: Vec<_> = combinations(&[1, 2, 3], 2).unwrap().collect();
/// assert_eq!(pairs, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Result<Combinations<'_, T>> {
    Combinations::new(items, k)
}

/// Returns every non-empty subset of `items`, smallest sizes first.
///
/// Sizes run from 1 to `items.len()` inclusive, so the last subset is the
/// whole collection. An empty slice yields nothing.
pub fn all_combinations<T: Clone>(items: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    (1..=items.len()).flat_map(move |k| Combinations {
        items,
        indices: (0..k).collect(),
        done: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(10, 3), Some(120));
        assert_eq!(binomial(10, 7), Some(120));
        assert_eq!(binomial(52, 5), Some(2_598_960));
        assert_eq!(binomial(30, 15), Some(155_117_520));
    }

    #[test]
    fn test_order_is_lexicographic() {
        let subsets: Vec<_> = combinations(&['a', 'b', 'c', 'd'], 2).unwrap().collect();
        assert_eq!(
            subsets,
            vec![
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['a', 'd'],
                vec!['b', 'c'],
                vec!['b', 'd'],
                vec!['c', 'd'],
            ]
        );
    }

    #[test]
    fn test_k_zero_yields_empty_subset() {
        let subsets: Vec<_> = combinations(&[1, 2, 3], 0).unwrap().collect();
        assert_eq!(subsets, vec![Vec::<i32>::new()]);

        let empty: [i32; 0] = [];
        let subsets: Vec<_> = combinations(&empty, 0).unwrap().collect();
        assert_eq!(subsets.len(), 1);
    }

    #[test]
    fn test_k_equals_n() {
        let subsets: Vec<_> = combinations(&[4, 5, 6], 3).unwrap().collect();
        assert_eq!(subsets, vec![vec![4, 5, 6]]);
    }

    #[test]
    fn test_k_too_large_rejected() {
        let err = combinations(&[1, 2], 3).unwrap_err();
        assert_eq!(err, SearchError::InvalidSubsetSize { k: 3, n: 2 });
    }

    #[test]
    fn test_counts_match_binomial() {
        let items: Vec<u8> = (0..7).collect();
        for k in 0..=7 {
            let count = combinations(&items, k).unwrap().count() as u64;
            assert_eq!(Some(count), binomial(7, k), "k={k}");
        }
    }

    #[test]
    fn test_all_combinations() {
        let all: Vec<_> = all_combinations(&[1, 2, 3]).collect();
        assert_eq!(
            all,
            vec![
                vec![1],
                vec![2],
                vec![3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3],
            ]
        );
    }

    #[test]
    fn test_all_combinations_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(all_combinations(&empty).count(), 0);
    }
}
