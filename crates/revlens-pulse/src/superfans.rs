//! Superfan segmentation.
//!
//! A superfan is a contributor whose count of distinct active days is at or
//! above a population quantile (default: the 95th percentile). The threshold
//! is recomputed from the full contributor population on every call; it is
//! never a fixed cutoff.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use revlens_core::{quantile, CompressedEdit, ContributorStats, RevlensError};

/// Options for superfan classification.
///
/// # Examples
///
/// ```
/// use revlens_pulse::superfans::SuperfanOptions;
///
/// let opts = SuperfanOptions::default();
/// assert_eq!(opts.quantile, 0.95);
/// ```
pub struct SuperfanOptions {
    /// Population quantile of distinct-day counts at which a contributor
    /// becomes a superfan. Linear interpolation (the toolkit-wide rule);
    /// ties at the boundary are included.
    pub quantile: f64,
}

impl Default for SuperfanOptions {
    fn default() -> Self {
        Self { quantile: 0.95 }
    }
}

/// Classify contributors by distinct-day activity.
///
/// Counts each contributor's distinct active calendar days, computes the
/// configured quantile of those counts over the whole population, and marks
/// contributors at or above it. Returns the per-contributor stats sorted by
/// `day_count` descending (contributor id ascending on ties) together with
/// the computed threshold.
///
/// Small populations make the threshold coarse: with fewer than ~20
/// contributors the 95th percentile can land above every count but the
/// maximum, so few or no superfans may be marked.
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
/// use revlens_pulse::superfans::{classify_superfans, SuperfanOptions};
///
/// let events = vec![
///     RevisionEvent::parse("alice", "2021-01-01T08:00:00Z", 100).unwrap(),
///     RevisionEvent::parse("alice", "2021-01-02T08:00:00Z", 150).unwrap(),
///     RevisionEvent::parse("bob", "2021-01-01T09:00:00Z", 120).unwrap(),
/// ];
/// let edits = compress(&events, &CompressOptions::default()).unwrap();
/// let (stats, threshold) = classify_superfans(&edits, &SuperfanOptions::default()).unwrap();
/// assert_eq!(stats[0].contributor_id, "alice");
/// assert_eq!(stats[0].day_count, 2);
/// assert!(threshold > 1.0);
/// ```
pub fn classify_superfans(
    edits: &[CompressedEdit],
    options: &SuperfanOptions,
) -> Result<(Vec<ContributorStats>, f64), RevlensError> {
    if edits.is_empty() {
        return Err(RevlensError::Stats(
            "superfan classification over empty edit set".into(),
        ));
    }

    // Distinct active days per contributor. Compression already guarantees
    // day uniqueness, but the set keeps this correct for uncompressed input.
    let mut active_days: HashMap<&str, HashSet<NaiveDate>> = HashMap::new();
    for edit in edits {
        active_days
            .entry(edit.contributor_id.as_str())
            .or_default()
            .insert(edit.calendar_day);
    }

    let day_counts: Vec<f64> = active_days.values().map(|days| days.len() as f64).collect();
    let threshold = quantile(&day_counts, options.quantile)?;

    let mut stats: Vec<ContributorStats> = active_days
        .into_iter()
        .map(|(contributor_id, days)| ContributorStats {
            contributor_id: contributor_id.into(),
            day_count: days.len(),
            is_superfan: days.len() as f64 >= threshold,
        })
        .collect();
    stats.sort_by(|a, b| {
        b.day_count
            .cmp(&a.day_count)
            .then_with(|| a.contributor_id.cmp(&b.contributor_id))
    });

    Ok((stats, threshold))
}

/// Annotate compressed edits with superfan membership.
///
/// Returns a new vector; the input is never mutated, so callers holding the
/// original table are unaffected. Contributors absent from `stats` stay
/// unmarked.
///
/// # Examples
///
/// ```
/// use revlens_core::RevisionEvent;
/// use revlens_pulse::compress::{compress, CompressOptions};
/// use revlens_pulse::superfans::{classify_superfans, join_superfans, SuperfanOptions};
///
/// let events = vec![
///     RevisionEvent::parse("alice", "2021-01-01T08:00:00Z", 100).unwrap(),
/// ];
/// let edits = compress(&events, &CompressOptions::default()).unwrap();
/// let (stats, _) = classify_superfans(&edits, &SuperfanOptions::default()).unwrap();
/// let joined = join_superfans(&edits, &stats);
/// assert!(joined[0].is_superfan); // sole contributor sits at every quantile
/// ```
pub fn join_superfans(
    edits: &[CompressedEdit],
    stats: &[ContributorStats],
) -> Vec<CompressedEdit> {
    let membership: HashMap<&str, bool> = stats
        .iter()
        .map(|s| (s.contributor_id.as_str(), s.is_superfan))
        .collect();

    edits
        .iter()
        .map(|edit| {
            let mut joined = edit.clone();
            joined.is_superfan = membership
                .get(edit.contributor_id.as_str())
                .copied()
                .unwrap_or(false);
            joined
        })
        .collect()
}
