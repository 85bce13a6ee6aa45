//! Integration test: compress → classify → join → filter on a synthetic
//! edit history with one obvious superfan and one obvious outlier edit.

use revlens_core::RevisionEvent;
use revlens_pulse::compress::{compress, CompressOptions};
use revlens_pulse::outliers::{filter_outliers, OutlierOptions};
use revlens_pulse::periods::{aggregate_by_period, Period};
use revlens_pulse::superfans::{classify_superfans, join_superfans, SuperfanOptions};

fn synthetic_history() -> Vec<RevisionEvent> {
    let mut events = Vec::new();
    let mut length = 500u64;

    // "fan" edits every day of January, twice a day (so compression matters).
    for day in 1..=30 {
        length += 40;
        events.push(
            RevisionEvent::parse(
                "fan",
                &format!("2021-01-{day:02}T08:00:00Z"),
                length - 20,
            )
            .unwrap(),
        );
        events.push(
            RevisionEvent::parse("fan", &format!("2021-01-{day:02}T19:00:00Z"), length).unwrap(),
        );
    }

    // Nineteen drive-by contributors with a single edit each, spread over
    // February, one of them a page blanking (huge negative delta).
    for i in 0..19 {
        let day = i + 1;
        length = if i == 7 { 40 } else { length + 25 };
        events.push(
            RevisionEvent::parse(
                &format!("visitor{i}"),
                &format!("2021-02-{day:02}T12:00:00Z"),
                length,
            )
            .unwrap(),
        );
    }
    events
}

#[test]
fn end_to_end_superfan_pipeline() {
    let events = synthetic_history();

    // Step 1: Compress
    let edits = compress(&events, &CompressOptions::default()).unwrap();
    // 30 fan days + 19 visitor days, two fan edits collapsed per day
    assert_eq!(edits.len(), 49);
    assert_eq!(edits[0].edit_size, 72);
    // The fan's surviving edits are the 19:00 revisions
    let fan_edits: Vec<_> = edits.iter().filter(|e| e.contributor_id == "fan").collect();
    assert_eq!(fan_edits.len(), 30);
    assert!(fan_edits
        .iter()
        .all(|e| e.event_time.to_rfc3339().contains("19:00:00")));

    // Step 2: Classify
    let (stats, threshold) = classify_superfans(&edits, &SuperfanOptions::default()).unwrap();
    assert_eq!(stats.len(), 20);
    assert!(threshold > 1.0, "threshold {threshold} should exceed 1");
    let superfans: Vec<_> = stats.iter().filter(|s| s.is_superfan).collect();
    assert_eq!(superfans.len(), 1);
    assert_eq!(superfans[0].contributor_id, "fan");
    assert_eq!(superfans[0].day_count, 30);

    // Step 3: Join
    let joined = join_superfans(&edits, &stats);
    for edit in &joined {
        assert_eq!(edit.is_superfan, edit.contributor_id == "fan");
    }

    // Step 4: Filter outliers — the page blanking goes, normal edits stay
    let (kept, cap) = filter_outliers(&joined, &OutlierOptions::default()).unwrap();
    assert!(kept.len() < joined.len());
    assert!(kept.iter().all(|e| e.edit_size.unsigned_abs() as f64 <= cap));
    assert!(
        !kept.iter().any(|e| e.edit_size < -500),
        "page blanking should have been filtered"
    );

    // Filtering is a pure subset: every kept row exists in the input
    for edit in &kept {
        assert!(joined
            .iter()
            .any(|j| j.contributor_id == edit.contributor_id
                && j.calendar_day == edit.calendar_day));
    }
}

#[test]
fn period_series_conserves_event_totals() {
    let events = synthetic_history();

    for period in [Period::Weeks(1), Period::Weeks(2), Period::Months(1)] {
        let series = aggregate_by_period(&events, period).unwrap();
        let total: u64 = series.iter().map(|b| b.revisions).sum();
        assert_eq!(total, events.len() as u64, "lossy bucketing for {period:?}");
        assert_eq!(
            series.last().unwrap().cumulative_revisions,
            events.len() as u64
        );
    }
}
