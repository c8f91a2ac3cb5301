//! Candidate filtering and ordering stages.

use alloc::vec::Vec;

use core::cmp::Ordering;
use itertools::Itertools;
use num_traits::{Float, FromPrimitive};

use super::width::half_prominence_widths;
use super::SortOrder;

/// Retain candidates whose value meets the height floor.
pub(crate) fn filter_by_height<F>(peaks: &mut Vec<usize>, x: &[F], min_height: F)
where
    F: PartialOrd + Copy,
{
    peaks.retain(|&i| x[i] >= min_height);
}

/// Retain candidates whose half-prominence width meets the width floor.
pub(crate) fn filter_by_width<F>(peaks: &mut Vec<usize>, x: &[F], min_width: F)
where
    F: Float + FromPrimitive,
{
    let widths = half_prominence_widths(x, peaks.as_slice()).widths;
    let kept = peaks
        .iter()
        .copied()
        .zip(widths)
        .filter(|&(_, w)| w >= min_width)
        .map(|(i, _)| i)
        .collect();
    *peaks = kept;
}

/// Enforce a minimum index separation between retained candidates.
///
/// Candidates are ranked by descending value, ties broken by ascending
/// index, and greedily accepted unless within `min_distance` of any
/// already-accepted peak. Suppression is transitive across the accepted set.
/// The survivors are returned in ascending index order.
pub(crate) fn enforce_distance<F>(peaks: Vec<usize>, x: &[F], min_distance: usize) -> Vec<usize>
where
    F: PartialOrd + Copy,
{
    if min_distance == 0 || peaks.is_empty() {
        return peaks;
    }

    let ranked = peaks
        .iter()
        .copied()
        .sorted_by(|&a, &b| x[b].partial_cmp(&x[a]).unwrap_or(Ordering::Equal));

    let mut accepted: Vec<usize> = Vec::new();
    for cand in ranked {
        if accepted
            .iter()
            .all(|&kept| kept.abs_diff(cand) >= min_distance)
        {
            accepted.push(cand);
        }
    }
    accepted.sort_unstable();
    accepted
}

/// Order the surviving candidates for emission.
pub(crate) fn order_peaks<F>(mut peaks: Vec<usize>, x: &[F], sort: SortOrder) -> Vec<usize>
where
    F: PartialOrd + Copy,
{
    match sort {
        // Survivors are already in ascending index order.
        SortOrder::LocationAscending => {}
        // Stable sort keeps equal values in ascending index order.
        SortOrder::HeightDescending => {
            peaks.sort_by(|&a, &b| x[b].partial_cmp(&x[a]).unwrap_or(Ordering::Equal));
        }
    }
    peaks
}
