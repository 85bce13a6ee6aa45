use crate::error::RevlensError;

/// Linear-interpolated quantile of a sample.
///
/// Uses the same definition as numpy/pandas defaults: for a sorted sample of
/// `n` values, quantile `q` sits at rank `q * (n - 1)` and interpolates
/// linearly between the two surrounding order statistics. This is the single
/// quantile rule used everywhere in the toolkit; boundary membership for
/// superfan classification and outlier filtering depends on it, so no other
/// interpolation may be mixed in.
///
/// The input does not need to be sorted.
///
/// # Errors
///
/// Returns [`RevlensError::Stats`] if the sample is empty, contains a
/// non-finite value, or `q` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use revlens_core::quantile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&values, 0.5).unwrap(), 2.5);
/// assert_eq!(quantile(&values, 0.0).unwrap(), 1.0);
/// assert_eq!(quantile(&values, 1.0).unwrap(), 4.0);
///
/// // 95th percentile of five values: rank 0.95 * 4 = 3.8,
/// // between the 4th and 5th order statistics.
/// let days = [1.0, 1.0, 1.0, 2.0, 5.0];
/// assert!((quantile(&days, 0.95).unwrap() - 4.4).abs() < 1e-12);
/// ```
pub fn quantile(values: &[f64], q: f64) -> Result<f64, RevlensError> {
    if values.is_empty() {
        return Err(RevlensError::Stats("quantile of empty sample".into()));
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(RevlensError::Stats(format!(
            "quantile level {q} outside [0, 1]"
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(RevlensError::Stats(
            "quantile over non-finite values".into(),
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_is_its_own_quantile() {
        assert_eq!(quantile(&[7.0], 0.0).unwrap(), 7.0);
        assert_eq!(quantile(&[7.0], 0.95).unwrap(), 7.0);
        assert_eq!(quantile(&[7.0], 1.0).unwrap(), 7.0);
    }

    #[test]
    fn unsorted_input_is_handled() {
        let values = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(quantile(&values, 0.5).unwrap(), 2.5);
    }

    #[test]
    fn interpolates_between_order_statistics() {
        // rank 0.25 * 3 = 0.75, between 10 and 20
        let values = [10.0, 20.0, 30.0, 40.0];
        assert!((quantile(&values, 0.25).unwrap() - 17.5).abs() < 1e-12);
    }

    #[test]
    fn empty_sample_is_an_error() {
        let err = quantile(&[], 0.95).unwrap_err();
        assert!(err.to_string().contains("empty sample"));
    }

    #[test]
    fn out_of_range_level_is_an_error() {
        assert!(quantile(&[1.0], 1.5).is_err());
        assert!(quantile(&[1.0], -0.1).is_err());
    }

    #[test]
    fn nan_is_an_error() {
        assert!(quantile(&[1.0, f64::NAN], 0.5).is_err());
    }
}
