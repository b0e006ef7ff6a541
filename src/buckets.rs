//! Calendar-day bucketing of time entries over an inclusive date range.
//!
//! This is the shared core under both the productivity series and the
//! department rollups: every per-day or per-hours figure in the engine
//! goes through the same minute totals, so the dashboards cannot drift
//! from the detail screens.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{BucketError, BucketResult};
use crate::model::TimeEntry;

/// Aggregated minutes for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub total_minutes: u64,
}

/// One bucket per day of the requested range, in range order, plus a
/// diagnostic count of entries that had no resolvable timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBuckets {
    pub buckets: Vec<DayBucket>,
    /// Entries excluded because none of `start_time`, `work_date`,
    /// `created_at` resolved to a date. Diagnostic only, never fatal.
    pub skipped: usize,
}

impl DayBuckets {
    /// Sum of all bucket minutes.
    pub fn total_minutes(&self) -> u64 {
        self.buckets.iter().map(|b| b.total_minutes).sum()
    }
}

/// Bucket `entries` into per-day minute totals over `[range_start,
/// range_end]` inclusive.
///
/// Each entry lands in the bucket for its own calendar date (first
/// resolvable of `start_time`, `work_date`, `created_at`); entries
/// outside the range are ignored, entries with no resolvable timestamp
/// are tallied in `skipped`. Pure: identical inputs yield identical
/// ordering and totals.
///
/// Returns [`BucketError::InvalidRange`] when `range_end` precedes
/// `range_start` — an inverted range is caller misuse, not data shape.
pub fn bucket_by_day(
    entries: &[TimeEntry],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> BucketResult<DayBuckets> {
    if range_end < range_start {
        return Err(BucketError::InvalidRange {
            start: range_start,
            end: range_end,
        });
    }

    let mut totals: HashMap<NaiveDate, u64> = HashMap::new();
    let mut skipped = 0usize;
    for entry in entries {
        let Some(date) = entry.resolved_date() else {
            skipped += 1;
            continue;
        };
        if date < range_start || date > range_end {
            continue;
        }
        *totals.entry(date).or_insert(0) += entry.duration_minutes;
    }
    if skipped > 0 {
        tracing::debug!(skipped, "time entries without a resolvable timestamp excluded");
    }

    let buckets = range_start
        .iter_days()
        .take_while(|d| *d <= range_end)
        .map(|date| DayBucket {
            date,
            total_minutes: totals.get(&date).copied().unwrap_or(0),
        })
        .collect();

    Ok(DayBuckets { buckets, skipped })
}

/// Convert a minute total to hours rounded to one decimal place.
pub fn hours_from_minutes(minutes: u64) -> f64 {
    (minutes as f64 / 60.0 * 10.0).round() / 10.0
}
