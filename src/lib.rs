//! Peak detection for 1D signals with Octave/MATLAB `findpeaks` semantics.
//!
//! The crate locates strict local maxima in a finite, materialized signal and
//! filters them by minimum height, minimum width at half prominence, and
//! minimum index separation, then orders the survivors by location or by
//! height. Outputs reproduce the Octave-Forge `findpeaks` results for the
//! same constraints, down to the index convention (see
//! [`PeakResult::one_based_locations`]).
//!
//! Two entry points are provided: the one-shot [`find_peaks`] function, and
//! the reusable [`PeakDetector`] kernel that validates its constraints once
//! via [`kernel::KernelLifecycle`] and then accepts any [`kernel::Signal1D`]
//! input (slices, arrays, `Vec`, `ndarray` 1D arrays and views).
//!
//! ```
//! use findpeaks::{find_peaks, FindPeaksConfig, SortOrder};
//!
//! let x = [0.0, 2.0, 4.0, 9.0, 5.0, 3.0, 6.0, 11.0, 5.0, 1.0, 6.0];
//! let peaks = find_peaks(
//!     &x,
//!     FindPeaksConfig {
//!         sort: SortOrder::HeightDescending,
//!         ..FindPeaksConfig::default()
//!     },
//! )
//! .unwrap();
//! assert_eq!(peaks.values, vec![11.0, 9.0]);
//! assert_eq!(peaks.locations, vec![7, 3]);
//! assert_eq!(peaks.one_based_locations(), vec![8, 4]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod kernel;

#[cfg(feature = "alloc")]
pub mod peak;

#[cfg(feature = "alloc")]
pub use peak::{
    find_peaks, half_prominence_widths, local_maxima, peak_prominences, DetectPeaks1D,
    EdgePolicy, FindPeaksConfig, PeakDetector, PeakProminences, PeakResult, PeakWidths,
    SortOrder,
};
