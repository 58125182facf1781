//! Exact-volume container selection.
//!
//! Given container capacities and a volume to store, find every selection
//! of containers whose capacities add up to exactly that volume, and the
//! selections using the fewest containers. Containers are distinguishable:
//! two containers of equal capacity yield distinct selections.

use crate::enumerate::all_combinations;
use crate::error::{Result, ScoringFailure};
use crate::search::{ExtremumSearch, SearchConfig};

/// Capacity of a single container.
pub type Volume = u32;

/// Selections that use the fewest containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillSummary {
    /// Containers used by each minimal selection.
    pub container_count: usize,

    /// Number of distinct minimal selections.
    pub ways: usize,

    /// The minimal selections, in enumeration order.
    pub fills: Vec<Vec<Volume>>,
}

fn total(selection: &[Volume]) -> u64 {
    selection.iter().map(|&v| u64::from(v)).sum()
}

/// Every non-empty selection whose capacities sum to `target`.
///
/// Selections are listed smallest first, then in source order.
///
/// # Examples
///
/// ```
/// use u_arrange::containers::exact_fills;
///
/// let fills = exact_fills(&[20, 15, 10, 5, 5], 25);
/// assert_eq!(fills.len(), 4);
/// ```
pub fn exact_fills(volumes: &[Volume], target: u64) -> Vec<Vec<Volume>> {
    all_combinations(volumes)
        .filter(|selection| total(selection) == target)
        .collect()
}

/// The selections reaching `target` exactly with the fewest containers.
///
/// # Errors
///
/// [`SearchError::NoScorableArrangement`](crate::SearchError::NoScorableArrangement)
/// when no selection reaches `target`.
///
/// # Examples
///
/// ```
/// use u_arrange::containers::fewest_containers;
///
/// let summary = fewest_containers(&[20, 15, 10, 5, 5], 25).unwrap();
/// assert_eq!(summary.container_count, 2);
/// assert_eq!(summary.ways, 3);
/// ```
pub fn fewest_containers(volumes: &[Volume], target: u64) -> Result<FillSummary> {
    let count_if_exact = |selection: &[Volume]| -> std::result::Result<usize, ScoringFailure> {
        if total(selection) == target {
            Ok(selection.len())
        } else {
            Err(ScoringFailure::Rejected("volume mismatch"))
        }
    };

    let config = SearchConfig::minimize().with_all_ties();
    let found = ExtremumSearch::over_all_combinations(volumes, &count_if_exact, &config)?;

    Ok(FillSummary {
        container_count: found.best_score,
        ways: found.tie_count,
        fills: found.arrangements,
    })
}
