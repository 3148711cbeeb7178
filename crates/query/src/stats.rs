//! Aggregate statistics over a filtered view.
//!
//! Derived, never stored: recomputed from the current view on every query
//! change, alongside the view itself.

use catalog::MovieRecord;

/// Summary numbers for the currently filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStats {
    /// Number of records in the view
    pub count: usize,
    /// Average critic score, rounded to the nearest integer (half up)
    pub avg_critic: i32,
    /// Average audience score, rounded to the nearest integer (half up)
    pub avg_audience: i32,
}

impl ViewStats {
    /// Compute statistics for a filtered view.
    ///
    /// An empty view yields all zeros rather than dividing by zero.
    pub fn compute(view: &[&MovieRecord]) -> Self {
        if view.is_empty() {
            return Self::default();
        }
        Self {
            count: view.len(),
            avg_critic: rounded_mean(view.iter().map(|r| r.critic_score)),
            avg_audience: rounded_mean(view.iter().map(|r| r.audience_score)),
        }
    }
}

/// Mean of the scores, rounded half away from zero. Scores are
/// non-negative, so this is round-half-up.
fn rounded_mean(scores: impl ExactSizeIterator<Item = i32>) -> i32 {
    let count = scores.len();
    let total: i64 = scores.map(i64::from).sum();
    (total as f64 / count as f64).round() as i32
}
