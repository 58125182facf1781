//! Extremum search configuration.

use super::types::Direction;

/// Configuration parameters for an extremum search.
///
/// # Examples
///
/// ```
/// use u_arrange::search::{Direction, SearchConfig};
///
/// let config = SearchConfig::maximize()
///     .with_max_ties(3)
///     .with_parallel(true);
/// assert_eq!(config.direction, Direction::Maximize);
/// assert_eq!(config.max_ties, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Whether the best score is the highest or the lowest.
    pub direction: Direction,

    /// How many arrangements sharing the best score are kept, in
    /// enumeration order. Must be at least 1.
    ///
    /// Ties beyond this limit are still counted in
    /// [`SearchResult::tie_count`](super::SearchResult::tie_count).
    pub max_ties: usize,

    /// Whether permutation searches are split across rayon workers.
    ///
    /// Has no effect unless the `parallel` feature is enabled. The result
    /// is identical to a sequential run either way.
    pub parallel: bool,

    /// Number of contiguous rank ranges a parallel search is split into.
    ///
    /// `0` picks four chunks per rayon worker thread.
    pub chunk_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Minimize,
            max_ties: 1,
            parallel: false,
            chunk_count: 0,
        }
    }
}

impl SearchConfig {
    /// Default configuration looking for the highest score.
    pub fn maximize() -> Self {
        Self::default().with_direction(Direction::Maximize)
    }

    /// Default configuration looking for the lowest score.
    pub fn minimize() -> Self {
        Self::default().with_direction(Direction::Minimize)
    }

    /// Sets the search direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets how many tied arrangements are kept.
    pub fn with_max_ties(mut self, n: usize) -> Self {
        self.max_ties = n;
        self
    }

    /// Keeps every tied arrangement.
    pub fn with_all_ties(self) -> Self {
        self.with_max_ties(usize::MAX)
    }

    /// Enables or disables parallel permutation search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the number of parallel chunks (`0` for automatic).
    pub fn with_chunk_count(mut self, n: usize) -> Self {
        self.chunk_count = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_ties == 0 {
            return Err("max_ties must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.direction, Direction::Minimize);
        assert_eq!(config.max_ties, 1);
        assert!(!config.parallel);
        assert_eq!(config.chunk_count, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfig::maximize()
            .with_all_ties()
            .with_parallel(true)
            .with_chunk_count(16);

        assert_eq!(config.direction, Direction::Maximize);
        assert_eq!(config.max_ties, usize::MAX);
        assert!(config.parallel);
        assert_eq!(config.chunk_count, 16);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_ties() {
        let err = SearchConfig::default().with_max_ties(0).validate();
        assert!(err.is_err());
    }
}
