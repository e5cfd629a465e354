use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::entry::MONTH_COUNT;

/// Positive-side axis labels in millimeters.
///
/// Starts at 0 and grows in 20 mm steps through the 100 mm kink, then in
/// 100 mm steps, stopping once the last label exceeds the larger of the
/// doubled temperature maximum and the precipitation maximum. The sequence
/// always contains at least `[0, 20]` because precipitation is non-negative.
#[must_use]
pub fn precipitation_labels(
    temperatures: &[f64; MONTH_COUNT],
    precipitation: &[f64; MONTH_COUNT],
) -> SmallVec<[i64; 8]> {
    let t_max = series_max(temperatures);
    let p_max = series_max(precipitation);
    let limit = (2.0 * t_max).max(p_max);

    let mut labels: SmallVec<[i64; 8]> = SmallVec::new();
    labels.push(0);
    while (*labels.last().unwrap_or(&0) as f64) <= limit {
        let step = if labels.len() < 6 { 20 } else { 100 };
        let next = labels.last().copied().unwrap_or(0) + step;
        labels.push(next);
    }
    labels
}

/// Negative-side (sub-zero temperature) axis labels.
///
/// Empty when no month dips below zero; otherwise the ascending multiples
/// of −10 from −10 down, bounded below (exclusively) by
/// `floor(min temperature) − 10`.
#[must_use]
pub fn subzero_labels(temperatures: &[f64; MONTH_COUNT]) -> SmallVec<[i64; 4]> {
    let t_min = series_min(temperatures);
    let mut labels: SmallVec<[i64; 4]> = SmallVec::new();
    if t_min < 0.0 {
        let stop = t_min.floor() as i64 - 10;
        let mut value = -10;
        while value > stop {
            labels.push(value);
            value -= 10;
        }
        labels.reverse();
    }
    labels
}

fn series_max(values: &[f64; MONTH_COUNT]) -> f64 {
    values
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |v| v.0)
}

fn series_min(values: &[f64; MONTH_COUNT]) -> f64 {
    values
        .iter()
        .copied()
        .map(OrderedFloat)
        .min()
        .map_or(0.0, |v| v.0)
}
