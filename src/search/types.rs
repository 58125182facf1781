//! Core traits for extremum search.
//!
//! The two central traits, [`Score`] and [`ScoreFn`], define the contract
//! between the generic search engine and the caller's objective.

use std::fmt::Debug;
use std::ops::Add;

use crate::error::ScoringFailure;

/// Marker trait for score values.
///
/// Scores must be totally ordered, cheaply copyable and summable from an
/// additive zero. Built-in implementations exist for the primitive integer
/// types.
pub trait Score: Ord + Copy + Send + Sync + Debug + Add<Output = Self> + 'static {
    /// The additive identity.
    const ZERO: Self;

    /// Addition that reports overflow as `None`.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_score {
    ($($t:ty),* $(,)?) => {
        $(
            impl Score for $t {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_score!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// An objective evaluated on one arrangement at a time.
///
/// Implementations must be pure: scoring the same arrangement twice gives
/// the same result. A failed evaluation excludes that arrangement from the
/// search without aborting it.
///
/// Any `Fn(&[T]) -> Result<S, ScoringFailure>` closure is a `ScoreFn`:
///
/// ```
/// use u_arrange::search::ScoreFn;
/// use u_arrange::ScoringFailure;
///
/// let spread = |a: &[i32]| -> Result<i32, ScoringFailure> {
///     Ok(a.windows(2).map(|w| (w[1] - w[0]).abs()).sum())
/// };
/// assert_eq!(spread.score(&[1, 4, 2]), Ok(5));
/// ```
pub trait ScoreFn<T> {
    /// The score type produced.
    type Score: Score;

    /// Scores an arrangement, or explains why it cannot be scored.
    fn score(&self, arrangement: &[T]) -> Result<Self::Score, ScoringFailure>;
}

impl<T, S, F> ScoreFn<T> for F
where
    F: Fn(&[T]) -> Result<S, ScoringFailure>,
    S: Score,
{
    type Score = S;

    fn score(&self, arrangement: &[T]) -> Result<S, ScoringFailure> {
        self(arrangement)
    }
}

/// Which extremum the search looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher scores are better.
    Maximize,

    /// Lower scores are better.
    #[default]
    Minimize,
}

impl Direction {
    /// Returns `true` if `candidate` strictly beats `incumbent`.
    ///
    /// Equal scores never beat each other, so the first arrangement to reach
    /// a score keeps it.
    pub fn is_better<S: Ord>(self, candidate: &S, incumbent: &S) -> bool {
        match self {
            Direction::Maximize => candidate > incumbent,
            Direction::Minimize => candidate < incumbent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_strict() {
        assert!(Direction::Maximize.is_better(&7, &3));
        assert!(!Direction::Maximize.is_better(&3, &7));
        assert!(!Direction::Maximize.is_better(&3, &3));
        assert!(Direction::Minimize.is_better(&1, &3));
        assert!(!Direction::Minimize.is_better(&3, &3));
    }

    #[test]
    fn test_default_direction_minimizes() {
        assert_eq!(Direction::default(), Direction::Minimize);
    }

    #[test]
    fn test_closure_score_fn() {
        let len = |a: &[u8]| -> Result<usize, ScoringFailure> { Ok(a.len()) };
        assert_eq!(len.score(&[1, 2, 3]), Ok(3));

        let reject = |_: &[u8]| -> Result<i64, ScoringFailure> {
            Err(ScoringFailure::Rejected("never"))
        };
        assert!(reject.score(&[]).is_err());
    }

    #[test]
    fn test_score_zero() {
        assert_eq!(<i64 as Score>::ZERO, 0);
        assert_eq!(<u16 as Score>::ZERO + 4, 4);
        assert_eq!(Score::checked_add(250u8, 5), Some(255));
        assert_eq!(Score::checked_add(250u8, 6), None);
        assert_eq!(Score::checked_add(i32::MIN, -1), None);
    }
}
