//! Peak prominence and half-prominence width estimation.
//!
//! Widths are measured in fractional index units at half the peak's
//! prominence above the higher of its two bases, with the crossing points on
//! either flank located by linear interpolation between samples.

use alloc::vec::Vec;

use num_traits::{Float, FromPrimitive};

/// Prominence result bundle for [`peak_prominences`].
#[derive(Debug, Clone, PartialEq)]
pub struct PeakProminences<F> {
    /// Prominence value for each input peak index.
    pub prominences: Vec<F>,
    /// Left base index for each peak.
    pub left_bases: Vec<usize>,
    /// Right base index for each peak.
    pub right_bases: Vec<usize>,
}

/// Width result bundle for [`half_prominence_widths`].
#[derive(Debug, Clone, PartialEq)]
pub struct PeakWidths<F> {
    /// Width of each peak in fractional index units.
    pub widths: Vec<F>,
    /// Half-prominence level each width was evaluated at.
    pub heights: Vec<F>,
    /// Left interpolated crossing point (index domain).
    pub left_ips: Vec<F>,
    /// Right interpolated crossing point (index domain).
    pub right_ips: Vec<F>,
}

/// Compute each peak's prominence above the higher of its two bases.
///
/// A base is the nearest point at which the signal, walking outward from the
/// peak, stops strictly descending: a local minimum, the first of an
/// equal-valued pair, or the sequence boundary. An endpoint peak is its own
/// base on the outer side and gets prominence zero. Out-of-range peak
/// indices are skipped.
pub fn peak_prominences<F>(x: &[F], peaks: &[usize]) -> PeakProminences<F>
where
    F: Float,
{
    let mut prominences = Vec::with_capacity(peaks.len());
    let mut left_bases = Vec::with_capacity(peaks.len());
    let mut right_bases = Vec::with_capacity(peaks.len());

    for &peak in peaks {
        if peak >= x.len() {
            continue;
        }

        let mut l = peak;
        while l > 0 && x[l - 1] < x[l] {
            l -= 1;
        }
        let mut r = peak;
        while r + 1 < x.len() && x[r + 1] < x[r] {
            r += 1;
        }

        let base_level = if x[l] > x[r] { x[l] } else { x[r] };
        prominences.push(x[peak] - base_level);
        left_bases.push(l);
        right_bases.push(r);
    }

    PeakProminences {
        prominences,
        left_bases,
        right_bases,
    }
}

/// Compute peak widths at half prominence.
///
/// On each flank the signal is walked outward from the peak until it falls
/// to the half-prominence level; the crossing point is linearly interpolated
/// between the last sample above the level and the first at or below it. A
/// flank that reaches the sequence boundary while still above the level uses
/// the boundary index as its crossing point. A zero-prominence peak has
/// width zero.
pub fn half_prominence_widths<F>(x: &[F], peaks: &[usize]) -> PeakWidths<F>
where
    F: Float + FromPrimitive,
{
    let prom = peak_prominences(x, peaks);
    let valid: Vec<usize> = peaks.iter().copied().filter(|&p| p < x.len()).collect();
    let two = F::one() + F::one();

    let mut widths = Vec::with_capacity(valid.len());
    let mut heights = Vec::with_capacity(valid.len());
    let mut left_ips = Vec::with_capacity(valid.len());
    let mut right_ips = Vec::with_capacity(valid.len());

    for (k, peak) in valid.iter().copied().enumerate() {
        let level = x[peak] - prom.prominences[k] / two;

        let mut l = peak;
        while l > 0 && x[l] > level {
            l -= 1;
        }
        let left_ip = if x[l] > level || l == peak {
            // Boundary reached above the level, or nothing above it to
            // interpolate against.
            F::from_usize(l).expect("index conversion")
        } else {
            let lo = x[l];
            let hi = x[l + 1];
            let idx = F::from_usize(l).expect("index conversion");
            if hi > lo {
                idx + (level - lo) / (hi - lo)
            } else {
                idx
            }
        };

        let mut r = peak;
        while r + 1 < x.len() && x[r] > level {
            r += 1;
        }
        let right_ip = if x[r] > level || r == peak {
            F::from_usize(r).expect("index conversion")
        } else {
            let lo = x[r];
            let hi = x[r - 1];
            let idx = F::from_usize(r).expect("index conversion");
            if hi > lo {
                idx - (level - lo) / (hi - lo)
            } else {
                idx
            }
        };

        widths.push(right_ip - left_ip);
        heights.push(level);
        left_ips.push(left_ip);
        right_ips.push(right_ip);
    }

    PeakWidths {
        widths,
        heights,
        left_ips,
        right_ips,
    }
}

#[cfg(test)]
mod tests {
    use super::{half_prominence_widths, peak_prominences};
    use approx::assert_abs_diff_eq;

    #[test]
    fn symmetric_triangle_has_unit_width() {
        let x = [0.0f64, 1.0, 0.0];
        let w = half_prominence_widths(&x, &[1]);
        assert_eq!(w.widths.len(), 1);
        assert_abs_diff_eq!(w.widths[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.left_ips[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(w.right_ips[0], 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(w.heights[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn asymmetric_flanks_interpolate_independently() {
        // Left base 0.6 raises the evaluation level to 0.8.
        let x = [0.6f64, 1.0, 0.0];
        let prom = peak_prominences(&x, &[1]);
        assert_eq!(prom.left_bases, vec![0]);
        assert_eq!(prom.right_bases, vec![2]);
        assert_abs_diff_eq!(prom.prominences[0], 0.4, epsilon = 1e-12);

        let w = half_prominence_widths(&x, &[1]);
        assert_abs_diff_eq!(w.heights[0], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(w.left_ips[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(w.right_ips[0], 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(w.widths[0], 0.7, epsilon = 1e-12);
    }

    #[test]
    fn equal_valued_pair_stops_the_base_walk() {
        let x = [0.98f64, 0.98, 1.0, 0.0];
        let prom = peak_prominences(&x, &[2]);
        assert_eq!(prom.left_bases, vec![1]);
        assert_eq!(prom.right_bases, vec![3]);
        assert_abs_diff_eq!(prom.prominences[0], 0.02, epsilon = 1e-12);

        let w = half_prominence_widths(&x, &[2]);
        assert_abs_diff_eq!(w.left_ips[0], 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(w.right_ips[0], 2.01, epsilon = 1e-12);
        assert_abs_diff_eq!(w.widths[0], 0.51, epsilon = 1e-12);
    }

    #[test]
    fn endpoint_peak_has_zero_prominence_and_width() {
        let x = [1.0f64, 0.5, 0.0];
        let prom = peak_prominences(&x, &[0]);
        assert_eq!(prom.prominences, vec![0.0]);
        assert_eq!(prom.left_bases, vec![0]);

        let w = half_prominence_widths(&x, &[0]);
        assert_eq!(w.widths, vec![0.0]);
    }

    #[test]
    fn out_of_range_peaks_are_skipped() {
        let x = [0.0f64, 1.0, 0.0];
        let prom = peak_prominences(&x, &[1, 9]);
        assert_eq!(prom.prominences.len(), 1);
        let w = half_prominence_widths(&x, &[1, 9]);
        assert_eq!(w.widths.len(), 1);
    }
}
