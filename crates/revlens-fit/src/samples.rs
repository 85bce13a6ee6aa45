//! Sample construction from raw event tables.

use std::collections::HashMap;

use revlens_core::RevisionEvent;

/// Per-contributor event counts, largest first.
///
/// This is the canonical sample for fitting a heavy-tailed distribution to
/// contribution activity: one value per contributor, counting their raw
/// (uncompressed) revisions.
///
/// # Examples
///
/// ```
/// use revlens_core::RevisionEvent;
/// use revlens_fit::events_per_contributor;
///
/// let events = vec![
///     RevisionEvent::parse("alice", "2021-01-01T08:00:00Z", 100).unwrap(),
///     RevisionEvent::parse("alice", "2021-01-01T09:00:00Z", 120).unwrap(),
///     RevisionEvent::parse("bob", "2021-01-02T08:00:00Z", 130).unwrap(),
/// ];
/// assert_eq!(events_per_contributor(&events), vec![2.0, 1.0]);
/// ```
pub fn events_per_contributor(events: &[RevisionEvent]) -> Vec<f64> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for event in events {
        *counts.entry(event.contributor_id.as_str()).or_default() += 1;
    }

    let mut sample: Vec<f64> = counts.into_values().map(|c| c as f64).collect();
    sample.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(contributor: &str, timestamp: &str) -> RevisionEvent {
        RevisionEvent::parse(contributor, timestamp, 100).unwrap()
    }

    #[test]
    fn counts_raw_events_not_days() {
        // Three same-day edits still count as three events.
        let events = vec![
            event("alice", "2021-01-01T08:00:00Z"),
            event("alice", "2021-01-01T09:00:00Z"),
            event("alice", "2021-01-01T10:00:00Z"),
            event("bob", "2021-01-01T11:00:00Z"),
        ];
        assert_eq!(events_per_contributor(&events), vec![3.0, 1.0]);
    }

    #[test]
    fn sample_length_equals_contributor_count() {
        let events = vec![
            event("a", "2021-01-01T08:00:00Z"),
            event("b", "2021-01-01T08:00:00Z"),
            event("c", "2021-01-01T08:00:00Z"),
        ];
        assert_eq!(events_per_contributor(&events).len(), 3);
    }

    #[test]
    fn empty_events_yield_empty_sample() {
        assert!(events_per_contributor(&[]).is_empty());
    }
}
