//! Distribution summaries for numeric note attributes.

use serde::{Deserialize, Serialize};

/// Statistics computed from a set of samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of samples
    pub count: usize,
    /// Sum of all values
    pub sum: f64,
    /// Minimum value observed
    pub min: f64,
    /// Maximum value observed
    pub max: f64,
    /// Mean of all values
    pub mean: f64,
    /// Middle value; mean of the two middle values for even counts
    pub median: f64,
}

impl Summary {
    /// Summarize the given values. Empty input yields all zeros.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut v: Vec<f64> = values.into_iter().filter(|x| !x.is_nan()).collect();
        if v.is_empty() {
            return Self::default();
        }

        v.sort_by(f64::total_cmp);

        let count = v.len();
        let sum: f64 = v.iter().sum();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (v[mid - 1] + v[mid]) / 2.0
        } else {
            v[mid]
        };

        Self {
            count,
            sum,
            min: v[0],
            max: v[count - 1],
            mean: sum / count as f64,
            median,
        }
    }
}

/// Divide, returning 0 when the denominator is 0
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Directed density `edges / (n * (n - 1))`, 0 for `n <= 1`
pub fn directed_density(edge_count: usize, node_count: usize) -> f64 {
    if node_count <= 1 {
        return 0.0;
    }
    let possible = node_count as f64 * (node_count as f64 - 1.0);
    edge_count as f64 / possible
}
