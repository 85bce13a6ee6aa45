use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RevlensError;

/// A single revision of a document, as reported by the source dataset.
///
/// One row per edit event. `content_length` is the cumulative size of the
/// document after this revision, not the size of the edit itself; edit sizes
/// are derived later by differencing (see `revlens-pulse`).
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use revlens_core::RevisionEvent;
///
/// let event = RevisionEvent {
///     contributor_id: "alice".into(),
///     event_time: Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).unwrap(),
///     content_length: 1024,
///     comment: Some("fixed infobox".into()),
/// };
/// assert_eq!(event.contributor_id, "alice");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionEvent {
    /// Opaque contributor identifier. Must be non-empty.
    pub contributor_id: String,
    /// When the revision was made. Events need not arrive sorted.
    pub event_time: DateTime<Utc>,
    /// Cumulative document size after this revision.
    pub content_length: u64,
    /// Free-text edit summary, if the dataset carries one.
    pub comment: Option<String>,
}

impl RevisionEvent {
    /// Build an event without a comment.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use revlens_core::RevisionEvent;
    ///
    /// let t = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    /// let event = RevisionEvent::new("alice", t, 72);
    /// assert!(event.comment.is_none());
    /// ```
    pub fn new(contributor_id: &str, event_time: DateTime<Utc>, content_length: u64) -> Self {
        Self {
            contributor_id: contributor_id.into(),
            event_time,
            content_length,
            comment: None,
        }
    }

    /// Build an event from an RFC 3339 timestamp string.
    ///
    /// Dataset dumps usually carry timestamps like `"2021-03-14T09:26:53Z"`;
    /// this is the ingestion path for those.
    ///
    /// # Errors
    ///
    /// Returns [`RevlensError::Timestamp`] if `timestamp` is not a valid
    /// RFC 3339 datetime.
    ///
    /// # Examples
    ///
    /// ```
    /// use revlens_core::RevisionEvent;
    ///
    /// let event = RevisionEvent::parse("alice", "2021-03-14T09:26:53Z", 1024).unwrap();
    /// assert_eq!(event.content_length, 1024);
    ///
    /// assert!(RevisionEvent::parse("alice", "yesterday", 1024).is_err());
    /// ```
    pub fn parse(
        contributor_id: &str,
        timestamp: &str,
        content_length: u64,
    ) -> Result<Self, RevlensError> {
        let event_time = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|e| RevlensError::Timestamp(format!("{timestamp}: {e}")))?
            .with_timezone(&Utc);
        Ok(Self::new(contributor_id, event_time, content_length))
    }

    /// Attach an edit summary.
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// The surviving revision after daily compression.
///
/// At most one of these exists per (contributor, calendar day); it is the
/// chronologically last revision that contributor made that day.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use revlens_core::CompressedEdit;
///
/// let edit = CompressedEdit {
///     contributor_id: "alice".into(),
///     calendar_day: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
///     event_time: Utc.with_ymd_and_hms(2021, 3, 14, 23, 1, 0).unwrap(),
///     content_length: 1024,
///     edit_size: -38,
///     is_superfan: false,
/// };
/// assert_eq!(edit.edit_size, -38);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedEdit {
    /// Opaque contributor identifier.
    pub contributor_id: String,
    /// Calendar day the surviving revision falls on (UTC).
    pub calendar_day: NaiveDate,
    /// Timestamp of the surviving (latest) revision that day.
    pub event_time: DateTime<Utc>,
    /// Cumulative document size after the surviving revision.
    pub content_length: u64,
    /// Size delta against the previous compressed edit in global
    /// chronological order, across all contributors. The first edit in the
    /// sequence gets a configured default instead.
    pub edit_size: i64,
    /// Whether the contributor is classified as a superfan. False until
    /// joined from [`ContributorStats`].
    pub is_superfan: bool,
}

/// Per-contributor activity summary.
///
/// # Examples
///
/// ```
/// use revlens_core::ContributorStats;
///
/// let stats = ContributorStats {
///     contributor_id: "alice".into(),
///     day_count: 41,
///     is_superfan: true,
/// };
/// assert!(stats.is_superfan);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorStats {
    /// Opaque contributor identifier.
    pub contributor_id: String,
    /// Number of distinct calendar days with at least one revision.
    pub day_count: usize,
    /// Whether `day_count` is at or above the population quantile threshold.
    pub is_superfan: bool,
}

/// Revision count for one calendar-aligned time bucket.
///
/// Only buckets containing at least one event exist; consumers expecting a
/// dense time series must fill gaps themselves.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use revlens_core::PeriodCount;
///
/// let bucket = PeriodCount {
///     period_start: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
///     revisions: 17,
///     cumulative_revisions: 240,
/// };
/// assert!(bucket.cumulative_revisions >= bucket.revisions);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCount {
    /// Canonical start date of the bucket.
    pub period_start: NaiveDate,
    /// Events falling in this bucket.
    pub revisions: u64,
    /// Running total of events up to and including this bucket.
    pub cumulative_revisions: u64,
}
