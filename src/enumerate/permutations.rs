//! Lazy permutation generator.
//!
//! # Algorithm
//!
//! Every ordering of `[x0, x1, ..., xn-1]` is obtained by taking an ordering
//! of the tail `[x1, ..., xn-1]` and inserting `x0` into one of its `n` slots
//! (both ends included). Unfolding that decomposition gives a mixed-radix
//! counter: digit `i` is the slot `xi` is inserted at, ranging over
//! `0..n - i`. Digit 0 varies fastest, so for each ordering of the tail the
//! head visits every slot from front to back before the tail advances.
//!
//! The generator keeps only the counter, so it needs O(n) state and no
//! recursion. Materializing one arrangement costs O(n²) element moves.
//!
//! Ranks index this order: rank `r` is the counter value whose digits are
//! `r` written in the mixed radix `(n, n - 1, ..., 1)`, least significant
//! digit first. [`Permutations::range`] starts from any rank, which is what
//! parallel partitioning builds on.

use std::iter::FusedIterator;
use std::ops::Range;

/// Returns `n!`, or `None` if it does not fit in a `u64` (n > 20).
///
/// # Examples
///
/// ```
/// use u_arrange::enumerate::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Iterator over every ordering of a borrowed slice.
///
/// Yields `n!` owned arrangements, each exactly once, in a fixed order.
/// An empty slice yields a single empty arrangement.
///
/// Arrangements are cloned out of the slice. For heavy element types,
/// permute indices (or references) instead.
///
/// # Examples
///
/// ```
/// use u_arrange::enumerate::Permutations;
///
/// let perms: Vec<Vec<char>> = Permutations::new(&['a', 'b', 'c']).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec!['a', 'b', 'c']);
/// assert_eq!(perms[1], vec!['b', 'a', 'c']);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<'a, T> {
    items: &'a [T],
    /// Insertion slot for each element; `slots[i] < items.len() - i`.
    slots: Vec<usize>,
    /// Arrangements left to yield; `None` when the count exceeds `u64`.
    remaining: Option<u64>,
    done: bool,
}

impl<'a, T: Clone> Permutations<'a, T> {
    /// Enumerates every ordering of `items`.
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            slots: vec![0; items.len()],
            remaining: factorial(items.len()),
            done: false,
        }
    }

    /// Enumerates the orderings whose ranks fall in `ranks`.
    ///
    /// The end of the range is clamped to `n!`. Concatenating the output of
    /// consecutive ranges reproduces [`Permutations::new`] exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_arrange::enumerate::Permutations;
    ///
    /// let items = [1, 2, 3, 4];
    /// let all: Vec<_> = Permutations::new(&items).collect();
    /// let tail: Vec<_> = Permutations::range(&items, 10..24).collect();
    /// assert_eq!(tail, all[10..].to_vec());
    /// ```
    pub fn range(items: &'a [T], ranks: Range<u64>) -> Self {
        let end = match factorial(items.len()) {
            Some(total) => ranks.end.min(total),
            None => ranks.end,
        };

        if ranks.start >= end {
            return Self {
                items,
                slots: vec![0; items.len()],
                remaining: Some(0),
                done: true,
            };
        }

        Self {
            items,
            slots: decode_rank(items.len(), ranks.start),
            remaining: Some(end - ranks.start),
            done: false,
        }
    }

    /// Number of elements being permuted.
    pub fn len_items(&self) -> usize {
        self.items.len()
    }

    fn current(&self) -> Vec<T> {
        let mut arrangement = Vec::with_capacity(self.items.len());
        for (item, &slot) in self.items.iter().zip(&self.slots).rev() {
            arrangement.insert(slot, item.clone());
        }
        arrangement
    }

    /// Advances the slot counter. Returns `false` once it wraps around.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot += 1;
            if *slot < n - i {
                return true;
            }
            *slot = 0;
        }
        false
    }
}

/// Decodes `rank` into slot digits (mixed radix `n, n - 1, ..., 1`).
fn decode_rank(n: usize, mut rank: u64) -> Vec<usize> {
    let mut slots = Vec::with_capacity(n);
    for i in 0..n {
        let radix = (n - i) as u64;
        slots.push((rank % radix) as usize);
        rank /= radix;
    }
    slots
}

impl<T: Clone> Iterator for Permutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }

        let arrangement = self.current();

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                self.done = true;
            }
        }
        if !self.done && !self.advance() {
            self.done = true;
        }

        Some(arrangement)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<'_, T> {}
