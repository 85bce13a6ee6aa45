//! Magnitude-based outlier filtering.
//!
//! Page blankings and bulk imports show up as single edits that are orders
//! of magnitude larger than normal activity and would swamp any downstream
//! size analysis. Filtering caps edits by |edit_size| at a population
//! quantile, symmetrically for additions and deletions.

use revlens_core::{quantile, CompressedEdit, RevlensError};

/// Options for outlier filtering.
///
/// # Examples
///
/// ```
/// use revlens_pulse::outliers::OutlierOptions;
///
/// let opts = OutlierOptions::default();
/// assert_eq!(opts.quantile, 0.95);
/// ```
pub struct OutlierOptions {
    /// Quantile of |edit_size| above which edits are dropped. Linear
    /// interpolation (the toolkit-wide rule); edits exactly at the
    /// threshold are retained.
    pub quantile: f64,
}

impl Default for OutlierOptions {
    fn default() -> Self {
        Self { quantile: 0.95 }
    }
}

/// Drop edits whose |edit_size| exceeds the population quantile.
///
/// The cap is two-sided by magnitude: a large deletion is excluded exactly
/// like a large addition. Returns the retained edits in their input order
/// together with the computed threshold.
///
/// # Errors
///
/// Returns [`RevlensError::Stats`] if `edits` is empty or the quantile
/// level is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use revlens_core::RevisionEvent;
/// use revlens_pulse::compress::{compress, CompressOptions};
/// use revlens_pulse::outliers::{filter_outliers, OutlierOptions};
///
/// let events = vec![
///     RevisionEvent::parse("a", "2021-01-01T08:00:00Z", 100).unwrap(),
///     RevisionEvent::parse("b", "2021-01-02T08:00:00Z", 110).unwrap(),
///     RevisionEvent::parse("c", "2021-01-03T08:00:00Z", 90_000).unwrap(),
/// ];
/// let edits = compress(&events, &CompressOptions::default()).unwrap();
/// let (kept, threshold) = filter_outliers(&edits, &OutlierOptions::default()).unwrap();
/// assert!(kept.len() < edits.len());
/// assert!(kept.iter().all(|e| e.edit_size.unsigned_abs() as f64 <= threshold));
/// ```
pub fn filter_outliers(
    edits: &[CompressedEdit],
    options: &OutlierOptions,
) -> Result<(Vec<CompressedEdit>, f64), RevlensError> {
    if edits.is_empty() {
        return Err(RevlensError::Stats(
            "outlier filtering over empty edit set".into(),
        ));
    }

    let magnitudes: Vec<f64> = edits
        .iter()
        .map(|e| e.edit_size.unsigned_abs() as f64)
        .collect();
    let threshold = quantile(&magnitudes, options.quantile)?;

    let kept = edits
        .iter()
        .filter(|e| e.edit_size.unsigned_abs() as f64 <= threshold)
        .cloned()
        .collect();

    Ok((kept, threshold))
}
