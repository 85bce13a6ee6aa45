//! Calendar-aligned period aggregation.
//!
//! Buckets revision events into fixed spans of whole weeks or whole months,
//! labels each bucket with its start date, and carries a running cumulative
//! total. Empty buckets are never synthesized: a quiet fortnight simply does
//! not appear, and consumers expecting a dense series must fill gaps.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use revlens_core::{PeriodCount, RevisionEvent, RevlensError};

/// Bucketing rule for period aggregation.
///
/// Week spans anchor on the Monday of the ISO week containing the earliest
/// event; month spans anchor on the first of that event's month. Subsequent
/// buckets step forward in whole spans from the anchor.
///
/// # Examples
///
/// ```
/// use revlens_pulse::periods::Period;
///
/// let biweekly = Period::default();
/// assert_eq!(biweekly, Period::Weeks(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Spans of `n` whole weeks, starting on a Monday.
    Weeks(u32),
    /// Spans of `n` whole calendar months, starting on the 1st.
    Months(u32),
}

impl Default for Period {
    /// Biweekly, the conventional granularity for revision-history plots.
    fn default() -> Self {
        Period::Weeks(2)
    }
}

/// Count revision events per calendar-aligned period.
///
/// Buckets are sorted ascending by start date, each labeled with the span's
/// start, with a cumulative revision total alongside the per-bucket count.
/// The bucket counts always sum to the input length, and the final
/// cumulative value equals that same total.
///
/// Empty input yields an empty series.
///
/// # Errors
///
/// Returns [`RevlensError::Stats`] for a zero-length span (a span of no
/// time cannot hold an event) or a month span too large for calendar
/// arithmetic.
///
/// # Examples
///
/// ```
/// use revlens_core::RevisionEvent;
/// use revlens_pulse::periods::{aggregate_by_period, Period};
///
/// let events = vec![
///     RevisionEvent::parse("a", "2021-03-02T08:00:00Z", 100).unwrap(),
///     RevisionEvent::parse("b", "2021-03-04T08:00:00Z", 150).unwrap(),
///     RevisionEvent::parse("a", "2021-03-18T08:00:00Z", 170).unwrap(),
/// ];
/// let series = aggregate_by_period(&events, Period::Weeks(2)).unwrap();
/// assert_eq!(series.len(), 2);
/// assert_eq!(series[0].revisions, 2);
/// assert_eq!(series[1].cumulative_revisions, 3);
/// ```
pub fn aggregate_by_period(
    events: &[RevisionEvent],
    period: Period,
) -> Result<Vec<PeriodCount>, RevlensError> {
    match period {
        Period::Weeks(0) | Period::Months(0) => {
            return Err(RevlensError::Stats(
                "period span of zero cannot hold events".into(),
            ));
        }
        Period::Months(n) if i32::try_from(n).is_err() => {
            return Err(RevlensError::Stats(format!(
                "month span {n} is too large for calendar arithmetic"
            )));
        }
        _ => {}
    }

    let Some(earliest) = events.iter().map(|e| e.event_time.date_naive()).min() else {
        return Ok(Vec::new());
    };
    let anchor = anchor_for(earliest, period);

    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in events {
        let start = bucket_start(event.event_time.date_naive(), anchor, period);
        *buckets.entry(start).or_default() += 1;
    }

    let mut series = Vec::with_capacity(buckets.len());
    let mut cumulative = 0u64;
    for (period_start, revisions) in buckets {
        cumulative += revisions;
        series.push(PeriodCount {
            period_start,
            revisions,
            cumulative_revisions: cumulative,
        });
    }
    Ok(series)
}

fn anchor_for(earliest: NaiveDate, period: Period) -> NaiveDate {
    match period {
        Period::Weeks(_) => {
            earliest - Duration::days(earliest.weekday().num_days_from_monday() as i64)
        }
        Period::Months(_) => first_of_month(earliest),
    }
}

// Spans are nonzero and month spans fit i32, validated by aggregate_by_period.
fn bucket_start(day: NaiveDate, anchor: NaiveDate, period: Period) -> NaiveDate {
    match period {
        Period::Weeks(n) => {
            let span_days = 7 * i64::from(n);
            let offset = day.signed_duration_since(anchor).num_days();
            anchor + Duration::days((offset / span_days) * span_days)
        }
        Period::Months(n) => {
            let span = n as i32;
            let months_since =
                (day.year() - anchor.year()) * 12 + day.month() as i32 - anchor.month() as i32;
            shift_months(anchor, (months_since / span) * span)
        }
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day)
}

fn shift_months(first_of: NaiveDate, months: i32) -> NaiveDate {
    let total = first_of.year() * 12 + first_of.month() as i32 - 1 + months;
    NaiveDate::from_ymd_opt(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, 1)
        .unwrap_or(first_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(timestamp: &str) -> RevisionEvent {
        RevisionEvent::parse("c", timestamp, 100).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_sum_to_input_length() {
        let events: Vec<RevisionEvent> = vec![
            event("2021-01-04T08:00:00Z"),
            event("2021-01-05T08:00:00Z"),
            event("2021-02-20T08:00:00Z"),
            event("2021-05-01T08:00:00Z"),
            event("2021-05-02T08:00:00Z"),
        ];
        let series = aggregate_by_period(&events, Period::Weeks(2)).unwrap();

        let total: u64 = series.iter().map(|b| b.revisions).sum();
        assert_eq!(total, events.len() as u64);
        assert_eq!(
            series.last().unwrap().cumulative_revisions,
            events.len() as u64
        );
    }

    #[test]
    fn weekly_buckets_anchor_on_monday() {
        // 2021-03-03 is a Wednesday; its week starts Monday 2021-03-01.
        let events = vec![event("2021-03-03T08:00:00Z")];
        let series = aggregate_by_period(&events, Period::Weeks(1)).unwrap();
        assert_eq!(series[0].period_start, date(2021, 3, 1));
    }

    #[test]
    fn biweekly_spans_step_from_the_anchor_week() {
        let events = vec![
            event("2021-03-03T08:00:00Z"), // anchor span: Mar 1 - Mar 14
            event("2021-03-14T23:00:00Z"), // still in anchor span
            event("2021-03-15T00:30:00Z"), // next span: Mar 15 - Mar 28
        ];
        let series = aggregate_by_period(&events, Period::Weeks(2)).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].period_start, date(2021, 3, 1));
        assert_eq!(series[0].revisions, 2);
        assert_eq!(series[1].period_start, date(2021, 3, 15));
        assert_eq!(series[1].revisions, 1);
    }

    #[test]
    fn empty_buckets_are_not_synthesized() {
        let events = vec![
            event("2021-01-04T08:00:00Z"),
            event("2021-06-01T08:00:00Z"),
        ];
        let series = aggregate_by_period(&events, Period::Weeks(1)).unwrap();
        // Months of silence in between, still exactly two buckets.
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn monthly_buckets_anchor_on_the_first() {
        let events = vec![
            event("2021-01-20T08:00:00Z"),
            event("2021-01-31T08:00:00Z"),
            event("2021-02-01T08:00:00Z"),
        ];
        let series = aggregate_by_period(&events, Period::Months(1)).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].period_start, date(2021, 1, 1));
        assert_eq!(series[0].revisions, 2);
        assert_eq!(series[1].period_start, date(2021, 2, 1));
    }

    #[test]
    fn quarterly_spans_cross_year_boundaries() {
        let events = vec![
            event("2021-11-10T08:00:00Z"), // anchor span: Nov 2021 - Jan 2022
            event("2022-01-15T08:00:00Z"), // still in anchor span
            event("2022-02-02T08:00:00Z"), // next span starts Feb 2022
        ];
        let series = aggregate_by_period(&events, Period::Months(3)).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].period_start, date(2021, 11, 1));
        assert_eq!(series[0].revisions, 2);
        assert_eq!(series[1].period_start, date(2022, 2, 1));
    }

    #[test]
    fn cumulative_totals_are_monotonic() {
        let events: Vec<RevisionEvent> = (1..=9)
            .map(|m| event(&format!("2021-0{m}-10T08:00:00Z")))
            .collect();
        let series = aggregate_by_period(&events, Period::Months(2)).unwrap();

        let mut previous = 0;
        for bucket in &series {
            assert!(bucket.cumulative_revisions > previous);
            previous = bucket.cumulative_revisions;
        }
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(aggregate_by_period(&[], Period::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn zero_length_spans_are_rejected() {
        let events = vec![event("2021-01-04T08:00:00Z")];
        for period in [Period::Weeks(0), Period::Months(0)] {
            let err = aggregate_by_period(&events, period).unwrap_err();
            assert!(err.to_string().contains("span of zero"), "{period:?}");
        }
    }

    #[test]
    fn oversized_month_spans_are_rejected() {
        let events = vec![event("2021-01-04T08:00:00Z")];
        let err = aggregate_by_period(&events, Period::Months(u32::MAX)).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn buckets_are_sorted_ascending() {
        let events = vec![
            event("2021-05-01T08:00:00Z"),
            event("2021-01-04T08:00:00Z"),
            event("2021-03-10T08:00:00Z"),
        ];
        let series = aggregate_by_period(&events, Period::Weeks(2)).unwrap();
        for pair in series.windows(2) {
            assert!(pair[0].period_start < pair[1].period_start);
        }
    }
}
