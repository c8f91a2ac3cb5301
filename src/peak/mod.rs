//! Peak detection with Octave/MATLAB `findpeaks` semantics.
//!
//! Detection runs as a fixed pipeline over an immutable signal: scan for
//! strict local maxima, drop candidates below the height floor, drop
//! candidates narrower than the width floor (measured at half prominence),
//! suppress candidates too close to a taller accepted peak, then order the
//! survivors for emission. Every stage only removes candidates; a reported
//! peak is always one of the scanned maxima and its value is always the
//! signal sample at its location.

mod scan;
mod select;
mod width;

pub use scan::{local_maxima, EdgePolicy};
pub use width::{half_prominence_widths, peak_prominences, PeakProminences, PeakWidths};

use alloc::vec::Vec;

use num_traits::{Float, FromPrimitive};

use crate::kernel::{ConstraintError, KernelLifecycle, Signal1D};

/// Ordering of the emitted peak set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending by sample location.
    #[default]
    LocationAscending,
    /// Descending by peak value; equal values fall back to ascending
    /// location.
    HeightDescending,
}

/// Detection constraints for [`find_peaks`] and [`PeakDetector`].
///
/// The `min_*` fields mirror the Octave `findpeaks` options `MinPeakHeight`,
/// `MinPeakDistance`, and `MinPeakWidth`; `None` leaves the corresponding
/// filter disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FindPeaksConfig<F>
where
    F: PartialOrd + Copy,
{
    /// Minimum peak height. Candidates compare with a plain `>=`.
    pub min_height: Option<F>,
    /// Minimum index separation between retained peaks.
    pub min_distance: Option<usize>,
    /// Minimum peak width at half prominence, in index units.
    pub min_width: Option<F>,
    /// Classification policy for the first and last samples.
    pub edges: EdgePolicy,
    /// Ordering of the emitted peaks.
    pub sort: SortOrder,
}

impl<F> Default for FindPeaksConfig<F>
where
    F: PartialOrd + Copy,
{
    fn default() -> Self {
        Self {
            min_height: None,
            min_distance: None,
            min_width: None,
            edges: EdgePolicy::default(),
            sort: SortOrder::default(),
        }
    }
}

/// Detected peaks as parallel value/location sequences.
///
/// `values[i]` is exactly the signal sample at `locations[i]`; locations are
/// zero-based and the two sequences always have equal length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeakResult<F> {
    /// Peak values.
    pub values: Vec<F>,
    /// Zero-based sample index of each peak.
    pub locations: Vec<usize>,
}

impl<F> PeakResult<F> {
    /// Locations in the one-based convention Octave and MATLAB report.
    pub fn one_based_locations(&self) -> Vec<usize> {
        self.locations.iter().map(|&i| i + 1).collect()
    }
}

/// 1D peak-detection capability.
pub trait DetectPeaks1D<F> {
    /// Detect peaks in `input` and return them ordered for emission.
    fn run<I>(&self, input: &I) -> Result<PeakResult<F>, ConstraintError>
    where
        I: Signal1D<F> + ?Sized;
}

/// Validated peak-detection kernel.
///
/// Constraints are checked once at construction through
/// [`KernelLifecycle::try_new`]; [`DetectPeaks1D::run`] may then be applied
/// to any number of signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakDetector<F>
where
    F: PartialOrd + Copy,
{
    config: FindPeaksConfig<F>,
}

impl<F> KernelLifecycle for PeakDetector<F>
where
    F: Float + FromPrimitive,
{
    type Config = FindPeaksConfig<F>;

    fn try_new(config: Self::Config) -> Result<Self, ConstraintError> {
        if let Some(min_height) = config.min_height {
            if !min_height.is_finite() {
                return Err(ConstraintError::InvalidConstraint {
                    arg: "min_height",
                    reason: "height floor must be finite",
                });
            }
        }
        if let Some(min_width) = config.min_width {
            if !min_width.is_finite() {
                return Err(ConstraintError::InvalidConstraint {
                    arg: "min_width",
                    reason: "width floor must be finite",
                });
            }
            if min_width < F::zero() {
                return Err(ConstraintError::InvalidConstraint {
                    arg: "min_width",
                    reason: "width floor must be non-negative",
                });
            }
        }
        Ok(Self { config })
    }
}

impl<F> DetectPeaks1D<F> for PeakDetector<F>
where
    F: Float + FromPrimitive,
{
    fn run<I>(&self, input: &I) -> Result<PeakResult<F>, ConstraintError>
    where
        I: Signal1D<F> + ?Sized,
    {
        let x = input.samples()?;

        let mut peaks = local_maxima(x, self.config.edges);
        if let Some(min_height) = self.config.min_height {
            select::filter_by_height(&mut peaks, x, min_height);
        }
        if let Some(min_width) = self.config.min_width {
            if min_width > F::zero() {
                select::filter_by_width(&mut peaks, x, min_width);
            }
        }
        if let Some(min_distance) = self.config.min_distance {
            peaks = select::enforce_distance(peaks, x, min_distance);
        }
        let locations = select::order_peaks(peaks, x, self.config.sort);

        let values = locations.iter().map(|&i| x[i]).collect();
        Ok(PeakResult { values, locations })
    }
}

/// Find peaks in a slice with the given constraints.
///
/// Validates `config`, then runs the detection pipeline once. Signals of
/// length 0 or 1 yield an empty result.
///
/// ```
/// use findpeaks::{find_peaks, FindPeaksConfig};
///
/// let x = [0.0, 4.0, 1.0, 9.0, 2.0];
/// let config = FindPeaksConfig {
///     min_height: Some(5.0),
///     ..FindPeaksConfig::default()
/// };
/// let peaks = find_peaks(&x, config).unwrap();
/// assert_eq!(peaks.values, vec![9.0]);
/// assert_eq!(peaks.locations, vec![3]);
/// ```
pub fn find_peaks<F>(x: &[F], config: FindPeaksConfig<F>) -> Result<PeakResult<F>, ConstraintError>
where
    F: Float + FromPrimitive,
{
    PeakDetector::try_new(config)?.run(x)
}
