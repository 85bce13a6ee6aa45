//! The fitting contract: options in, report out.

use revlens_core::Result;
use serde::{Deserialize, Serialize};

/// Options for distribution fitting.
///
/// # Examples
///
/// ```
/// use revlens_fit::FitOptions;
///
/// let opts = FitOptions::default();
/// assert!(opts.xmin.is_none());
/// assert_eq!(opts.bootstrap_rounds, 200);
/// ```
pub struct FitOptions {
    /// Lower cutoff of the fitted tail. `None` uses the smallest positive
    /// sample, fitting the whole distribution.
    pub xmin: Option<f64>,
    /// Resampling rounds for the bootstrap standard error used when the
    /// analytic likelihood-ratio variance degenerates.
    pub bootstrap_rounds: usize,
    /// Seed for the bootstrap resampler. Fixed by default so comparison
    /// p-values are reproducible run to run.
    pub seed: u64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            xmin: None,
            bootstrap_rounds: 200,
            seed: 42,
        }
    }
}

/// Result of fitting a heavy-tailed distribution to a sample.
///
/// # Examples
///
/// ```
/// use revlens_fit::FitReport;
///
/// let report = FitReport {
///     alpha: 2.41,
///     xmin: 1.0,
///     n_tail: 1800,
///     ks_statistic: 0.03,
///     loglikelihood_ratio: 85.2,
///     p_value: 0.001,
/// };
/// let json = report.to_json().unwrap();
/// assert!(json.contains("\"ksStatistic\""));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitReport {
    /// Fitted power-law exponent.
    pub alpha: f64,
    /// Lower cutoff the tail was fitted above.
    pub xmin: f64,
    /// Number of samples in the fitted tail.
    pub n_tail: usize,
    /// Kolmogorov-Smirnov distance between the empirical tail CDF and the
    /// fitted CDF. Smaller is better.
    pub ks_statistic: f64,
    /// Log-likelihood of the power law minus that of the exponential
    /// alternative over the same tail. Positive favors the power law.
    pub loglikelihood_ratio: f64,
    /// Two-sided significance of the likelihood ratio. Small values mean
    /// the preferred model is a genuinely better description.
    pub p_value: f64,
}

impl FitReport {
    /// Serialize the report for an external plotting or reporting surface.
    ///
    /// # Errors
    ///
    /// Returns [`revlens_core::RevlensError::Serialization`] on failure.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A swappable distribution-fitting engine.
///
/// The contract is deliberately narrow: positive-valued samples in, a
/// [`FitReport`] out. Nothing else in the workspace depends on how the
/// engine computes its numbers.
pub trait FitEngine {
    /// Fit the engine's distribution family to `samples`.
    ///
    /// # Errors
    ///
    /// Returns [`revlens_core::RevlensError::Fit`] when the sample is
    /// unusable for fitting (no positive values, degenerate tail).
    fn fit(&self, samples: &[f64], options: &FitOptions) -> Result<FitReport>;
}
