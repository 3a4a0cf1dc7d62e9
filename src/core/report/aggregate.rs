//! Aggregation primitives shared by the reports

use std::cmp::Ordering;

/// Running mean, accumulated in input order
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// `None` when nothing was pushed
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Median of integer values
///
/// Even-sized inputs give the mean of the two middle values. Returns `None`
/// for an empty input.
pub fn median(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

/// Dense rank of each value, highest value first
///
/// The result is aligned with `values`. Equal values share a rank and the
/// next distinct value gets the previous rank plus one, whatever the number
/// of ties.
///
/// ```
/// use listing_reports::core::report::aggregate::dense_rank_descending;
///
/// assert_eq!(dense_rank_descending(&[0.5, 0.9, 0.5, 0.1]), vec![2, 1, 2, 3]);
/// ```
pub fn dense_rank_descending(values: &[f64]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut ranks = vec![0; values.len()];
    let mut rank = 0;
    let mut previous: Option<f64> = None;

    for index in order {
        let value = values[index];
        if previous.map_or(true, |p| p.total_cmp(&value) != Ordering::Equal) {
            rank += 1;
            previous = Some(value);
        }
        ranks[index] = rank;
    }

    ranks
}
