//! Extremum search execution engine.
//!
//! # Algorithm
//!
//! 1. Enumerate candidate arrangements (any iterator, or one of the
//!    generators in [`crate::enumerate`])
//! 2. Score each candidate; a scoring failure excludes that candidate only
//! 3. Fold successes into an [`Incumbent`]: strictly better scores replace
//!    the best, equal scores are appended as ties
//! 4. Fail with [`SearchError::NoScorableArrangement`] if nothing scored
//!
//! Parallel permutation search splits the rank space into contiguous
//! ranges, runs steps 1-3 per range on rayon, then merges the partial
//! incumbents in range order. The merge preserves first-encountered-wins,
//! so results match the sequential run exactly.

use tracing::{debug, trace};

use super::config::SearchConfig;
use super::incumbent::{Incumbent, SearchResult};
use super::types::{Score, ScoreFn};
use crate::enumerate::{all_combinations, Combinations, Permutations};
use crate::error::{Result, SearchError};

#[cfg(feature = "parallel")]
use crate::enumerate::factorial;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result type produced for a score function `F` over elements `T`.
pub type SearchOutcome<T, F> = Result<SearchResult<T, <F as ScoreFn<T>>::Score>>;

/// Exhaustive extremum search runner.
pub struct ExtremumSearch;

impl ExtremumSearch {
    /// Scores every candidate and returns the best.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidConfig`] if `config` fails validation
    /// - [`SearchError::NoScorableArrangement`] if no candidate could be scored
    ///
    /// # Examples
    ///
    /// ```
    /// use u_arrange::search::{ExtremumSearch, SearchConfig};
    /// use u_arrange::ScoringFailure;
    ///
    /// let candidates = vec![vec![3], vec![7], vec![1]];
    /// let first = |a: &[i32]| -> Result<i32, ScoringFailure> { Ok(a[0]) };
    ///
    /// let best = ExtremumSearch::run(candidates, &first, &SearchConfig::maximize()).unwrap();
    /// assert_eq!(best.best_score, 7);
    /// ```
    pub fn run<T, I, F>(candidates: I, score_fn: &F, config: &SearchConfig) -> SearchOutcome<T, F>
    where
        I: IntoIterator<Item = Vec<T>>,
        F: ScoreFn<T>,
    {
        config.validate().map_err(SearchError::InvalidConfig)?;

        let candidates = candidates.into_iter();
        debug!(
            event = "search_start",
            direction = ?config.direction,
            candidates = candidates.size_hint().0,
            parallel = false,
        );

        let mut incumbent = Incumbent::new(config);
        scan(&mut incumbent, candidates, score_fn);
        finish(incumbent)
    }

    /// Searches every ordering of `items`.
    ///
    /// With [`SearchConfig::parallel`] set and the `parallel` feature
    /// enabled, the permutations are scored on rayon workers.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_arrange::search::{ExtremumSearch, SearchConfig};
    /// use u_arrange::ScoringFailure;
    ///
    /// // Smallest total jump between consecutive values.
    /// let jumps = |a: &[i32]| -> Result<i32, ScoringFailure> {
    ///     Ok(a.windows(2).map(|w| (w[1] - w[0]).abs()).sum())
    /// };
    /// let best = ExtremumSearch::over_permutations(&[5, 1, 3], &jumps, &SearchConfig::minimize())
    ///     .unwrap();
    /// assert_eq!(best.best_score, 4);
    /// assert_eq!(best.evaluated, 6);
    /// ```
    pub fn over_permutations<T, F>(items: &[T], score_fn: &F, config: &SearchConfig) -> SearchOutcome<T, F>
    where
        T: Clone + Send + Sync,
        F: ScoreFn<T> + Sync,
    {
        config.validate().map_err(SearchError::InvalidConfig)?;

        if config.parallel {
            #[cfg(feature = "parallel")]
            {
                return over_permutations_parallel(items, score_fn, config);
            }
            #[cfg(not(feature = "parallel"))]
            debug!(
                event = "parallel_unavailable",
                "crate built without the `parallel` feature, searching sequentially"
            );
        }

        debug!(
            event = "search_start",
            direction = ?config.direction,
            elements = items.len(),
            parallel = false,
        );

        let mut incumbent = Incumbent::new(config);
        scan(&mut incumbent, Permutations::new(items), score_fn);
        finish(incumbent)
    }

    /// Searches every `k`-element subset of `items`.
    ///
    /// # Errors
    ///
    /// Additionally returns [`SearchError::InvalidSubsetSize`] if
    /// `k > items.len()`.
    pub fn over_combinations<T, F>(
        items: &[T],
        k: usize,
        score_fn: &F,
        config: &SearchConfig,
    ) -> SearchOutcome<T, F>
    where
        T: Clone,
        F: ScoreFn<T>,
    {
        let subsets = Combinations::new(items, k)?;
        Self::run(subsets, score_fn, config)
    }

    /// Searches every non-empty subset of `items`, smallest sizes first.
    pub fn over_all_combinations<T, F>(items: &[T], score_fn: &F, config: &SearchConfig) -> SearchOutcome<T, F>
    where
        T: Clone,
        F: ScoreFn<T>,
    {
        Self::run(all_combinations(items), score_fn, config)
    }
}

fn scan<T, I, F>(incumbent: &mut Incumbent<T, F::Score>, candidates: I, score_fn: &F)
where
    I: Iterator<Item = Vec<T>>,
    F: ScoreFn<T>,
{
    for arrangement in candidates {
        match score_fn.score(&arrangement) {
            Ok(score) => {
                if incumbent.offer(score, arrangement) {
                    trace!(event = "new_best", score = ?score);
                }
            }
            Err(failure) => {
                trace!(event = "candidate_skipped", reason = %failure);
                incumbent.reject();
            }
        }
    }
}

fn finish<T, S: Score>(incumbent: Incumbent<T, S>) -> Result<SearchResult<T, S>> {
    let result = incumbent.into_result();
    match &result {
        Ok(found) => debug!(
            event = "search_end",
            best_score = ?found.best_score,
            evaluated = found.evaluated,
            skipped = found.skipped,
            ties = found.tie_count,
        ),
        Err(err) => debug!(event = "search_end", error = %err),
    }
    result
}

#[cfg(feature = "parallel")]
fn over_permutations_parallel<T, F>(items: &[T], score_fn: &F, config: &SearchConfig) -> SearchOutcome<T, F>
where
    T: Clone + Send + Sync,
    F: ScoreFn<T> + Sync,
{
    // Rank ranges need n! to fit in a u64; beyond 20 elements a search
    // would not finish anyway.
    let Some(total) = factorial(items.len()) else {
        debug!(
            event = "parallel_unavailable",
            elements = items.len(),
            "permutation count exceeds u64, searching sequentially"
        );
        let mut incumbent = Incumbent::new(config);
        scan(&mut incumbent, Permutations::new(items), score_fn);
        return finish(incumbent);
    };

    let requested = match config.chunk_count {
        0 => rayon::current_num_threads() * 4,
        n => n,
    };
    let chunks = (requested as u64).clamp(1, total);
    let chunk_len = total.div_ceil(chunks);

    debug!(
        event = "search_start",
        direction = ?config.direction,
        elements = items.len(),
        parallel = true,
        chunks = chunks,
        chunk_len = chunk_len,
    );

    let partials: Vec<Incumbent<T, F::Score>> = (0..chunks as usize)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk as u64 * chunk_len;
            let end = (start + chunk_len).min(total);
            let mut incumbent = Incumbent::new(config);
            scan(&mut incumbent, Permutations::range(items, start..end), score_fn);
            incumbent
        })
        .collect();

    let mut merged = Incumbent::new(config);
    for partial in partials {
        merged.merge(partial);
    }
    finish(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringFailure;

    fn first(a: &[i32]) -> std::result::Result<i32, ScoringFailure> {
        a.first()
            .copied()
            .ok_or_else(|| ScoringFailure::Rejected("empty"))
    }

    #[test]
    fn test_direction_selection() {
        let candidates = || vec![vec![3], vec![7], vec![1]];

        let max = ExtremumSearch::run(candidates(), &first, &SearchConfig::maximize()).unwrap();
        assert_eq!(max.best_score, 7);
        assert_eq!(max.best(), &[7]);

        let min = ExtremumSearch::run(candidates(), &first, &SearchConfig::minimize()).unwrap();
        assert_eq!(min.best_score, 1);
        assert_eq!(min.best(), &[1]);
    }

    #[test]
    fn test_constant_score() {
        let items = ['a', 'b', 'c', 'd'];
        let constant = |_: &[char]| -> std::result::Result<i64, ScoringFailure> { Ok(42) };

        let result =
            ExtremumSearch::over_permutations(&items, &constant, &SearchConfig::maximize()).unwrap();
        assert_eq!(result.best_score, 42);
        assert_eq!(result.best().len(), items.len());
        assert_eq!(result.tie_count, 24);
        assert_eq!(result.best(), &items);
    }

    #[test]
    fn test_single_failure_skipped() {
        // The best candidate fails; the runner-up wins.
        let candidates = vec![vec![3], vec![99], vec![7], vec![1]];
        let picky = |a: &[i32]| -> std::result::Result<i32, ScoringFailure> {
            if a[0] == 99 {
                Err(ScoringFailure::MissingRelation { from: 0, to: 1 })
            } else {
                Ok(a[0])
            }
        };

        let result = ExtremumSearch::run(candidates, &picky, &SearchConfig::maximize()).unwrap();
        assert_eq!(result.best_score, 7);
        assert_eq!(result.evaluated, 3);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_all_failing() {
        let never = |_: &[u8]| -> std::result::Result<i32, ScoringFailure> {
            Err(ScoringFailure::Rejected("no"))
        };
        let err =
            ExtremumSearch::over_permutations(&[1u8, 2, 3], &never, &SearchConfig::default())
                .unwrap_err();
        assert_eq!(err, SearchError::NoScorableArrangement { skipped: 6 });
    }

    #[test]
    fn test_empty_candidates() {
        let err = ExtremumSearch::run(Vec::<Vec<i32>>::new(), &first, &SearchConfig::default())
            .unwrap_err();
        assert_eq!(err, SearchError::NoScorableArrangement { skipped: 0 });
    }

    #[test]
    fn test_empty_collection_has_one_arrangement() {
        let len = |a: &[u8]| -> std::result::Result<usize, ScoringFailure> { Ok(a.len()) };
        let result = ExtremumSearch::over_permutations(&[], &len, &SearchConfig::default()).unwrap();
        assert_eq!(result.best_score, 0);
        assert!(result.best().is_empty());
        assert_eq!(result.evaluated, 1);
    }

    #[test]
    fn test_invalid_config() {
        let config = SearchConfig::default().with_max_ties(0);
        let err = ExtremumSearch::run(vec![vec![1]], &first, &config).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn test_over_combinations() {
        let items = [4, 9, 2, 7];
        let sum = |a: &[i32]| -> std::result::Result<i32, ScoringFailure> { Ok(a.iter().sum()) };

        let result =
            ExtremumSearch::over_combinations(&items, 2, &sum, &SearchConfig::maximize()).unwrap();
        assert_eq!(result.best_score, 16);
        assert_eq!(result.best(), &[9, 7]);
        assert_eq!(result.evaluated, 6);

        let err = ExtremumSearch::over_combinations(&items, 5, &sum, &SearchConfig::maximize())
            .unwrap_err();
        assert_eq!(err, SearchError::InvalidSubsetSize { k: 5, n: 4 });
    }

    #[test]
    fn test_over_all_combinations() {
        let items = [4, 9, 2, 7];
        // Closest subset sum to 11: {4, 7} and {9, 2} both hit it exactly.
        let distance = |a: &[i32]| -> std::result::Result<i32, ScoringFailure> {
            Ok((a.iter().sum::<i32>() - 11).abs())
        };
        let config = SearchConfig::minimize().with_all_ties();
        let result = ExtremumSearch::over_all_combinations(&items, &distance, &config).unwrap();
        assert_eq!(result.best_score, 0);
        assert_eq!(result.arrangements, vec![vec![4, 7], vec![9, 2]]);
        assert_eq!(result.evaluated, 15);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        use crate::search::Direction;

        let items: Vec<i32> = vec![3, -1, 4, -1, 5, -9, 2];
        // Weighted position sum: many ties, so tie order is exercised.
        let weighted = |a: &[i32]| -> std::result::Result<i32, ScoringFailure> {
            if a[0] == 5 {
                return Err(ScoringFailure::Rejected("5 may not lead"));
            }
            Ok(a.iter().enumerate().map(|(i, v)| (i as i32 % 3) * v).sum())
        };

        for direction in [Direction::Maximize, Direction::Minimize] {
            let base = SearchConfig::default()
                .with_direction(direction)
                .with_max_ties(5);
            let sequential = ExtremumSearch::over_permutations(&items, &weighted, &base).unwrap();

            for chunks in [1, 3, 7, 64, 10_000] {
                let config = base.clone().with_parallel(true).with_chunk_count(chunks);
                let parallel = ExtremumSearch::over_permutations(&items, &weighted, &config).unwrap();
                assert_eq!(parallel, sequential, "{direction:?} with {chunks} chunks");
            }
        }
    }
}
