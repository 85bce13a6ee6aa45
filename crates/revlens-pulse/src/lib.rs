//! Revision aggregation: daily compression, superfan segmentation,
//! outlier filtering, and period bucketing.
//!
//! Collapses raw edit-history events into one representative edit per
//! contributor per day, derives edit sizes by global chronological
//! differencing, segments the most persistent contributors ("superfans")
//! by activity quantile, and aggregates events into calendar-aligned
//! time buckets.

pub mod compress;
pub mod outliers;
pub mod periods;
pub mod superfans;
