//! Week/month productivity series for charting.
//!
//! A series is a fresh, full recomputation over a window derived from an
//! anchor date: week mode covers Sunday-through-Saturday around the
//! anchor, month mode covers the anchor's whole calendar month. Paging
//! moves the anchor (±7 days / ±1 calendar month) and recomputes — there
//! is no incremental state to invalidate.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::buckets::{self, hours_from_minutes};
use crate::error::SeriesResult;
use crate::model::TimeEntry;

// ---------------------------------------------------------------------------
// Windows and paging
// ---------------------------------------------------------------------------

/// Window shape for a productivity series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMode {
    /// Seven days, the Sunday on/before the anchor through Saturday.
    Week,
    /// Every day of the calendar month containing the anchor.
    Month,
}

/// Presentation flags passed in by the consuming view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOptions {
    /// Force Saturday/Sunday points to zero hours. A view-layer policy
    /// for screens that exclude non-working days, not an aggregation
    /// rule.
    pub zero_weekends: bool,
}

/// The inclusive day range a mode/anchor pair covers.
pub fn window(mode: SeriesMode, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    match mode {
        SeriesMode::Week => {
            let back = u64::from(anchor.weekday().num_days_from_sunday());
            let start = anchor.checked_sub_days(Days::new(back)).unwrap_or(anchor);
            let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
            (start, end)
        }
        SeriesMode::Month => {
            let start = anchor.with_day(1).unwrap_or(anchor);
            let end = start
                .checked_add_months(Months::new(1))
                .and_then(|next| next.checked_sub_days(Days::new(1)))
                .unwrap_or(anchor);
            (start, end)
        }
    }
}

/// Advance the anchor one page (7 days / 1 calendar month).
pub fn page_forward(mode: SeriesMode, anchor: NaiveDate) -> NaiveDate {
    match mode {
        SeriesMode::Week => anchor.checked_add_days(Days::new(7)).unwrap_or(anchor),
        SeriesMode::Month => anchor
            .checked_add_months(Months::new(1))
            .unwrap_or(anchor),
    }
}

/// Retreat the anchor one page (7 days / 1 calendar month).
pub fn page_back(mode: SeriesMode, anchor: NaiveDate) -> NaiveDate {
    match mode {
        SeriesMode::Week => anchor.checked_sub_days(Days::new(7)).unwrap_or(anchor),
        SeriesMode::Month => anchor
            .checked_sub_months(Months::new(1))
            .unwrap_or(anchor),
    }
}

// ---------------------------------------------------------------------------
// Series building
// ---------------------------------------------------------------------------

/// One charted day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    /// Three-letter weekday, e.g. "Sun".
    pub day_label: String,
    /// Short date, e.g. "Feb 11".
    pub date_label: String,
    /// Logged hours for the day, rounded to one decimal.
    pub hours: f64,
}

/// A computed productivity series over one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductivitySeries {
    pub mode: SeriesMode,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub points: Vec<SeriesPoint>,
    /// Largest per-day hours in the series, for chart scaling.
    pub max_hours: f64,
    /// Entries excluded for lack of a resolvable timestamp.
    pub skipped: usize,
}

impl ProductivitySeries {
    /// Bar height in `[0, 1]` for a point, against `max(1, max_hours)`.
    /// An all-zero series renders flat bars rather than dividing by
    /// zero.
    pub fn scale_factor(&self, point: &SeriesPoint) -> f64 {
        point.hours / self.max_hours.max(1.0)
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Build the productivity series for `mode` around `anchor`.
///
/// Delegates day totals to [`buckets::bucket_by_day`] so the chart and
/// every other per-day figure agree.
pub fn build_series(
    entries: &[TimeEntry],
    mode: SeriesMode,
    anchor: NaiveDate,
    options: SeriesOptions,
) -> SeriesResult<ProductivitySeries> {
    let (range_start, range_end) = window(mode, anchor);
    let day_buckets = buckets::bucket_by_day(entries, range_start, range_end)?;

    let points: Vec<SeriesPoint> = day_buckets
        .buckets
        .iter()
        .map(|bucket| {
            let hours = if options.zero_weekends && is_weekend(bucket.date) {
                0.0
            } else {
                hours_from_minutes(bucket.total_minutes)
            };
            SeriesPoint {
                date: bucket.date,
                day_label: bucket.date.format("%a").to_string(),
                date_label: bucket.date.format("%b %d").to_string(),
                hours,
            }
        })
        .collect();

    let max_hours = points.iter().map(|p| p.hours).fold(0.0, f64::max);

    Ok(ProductivitySeries {
        mode,
        range_start,
        range_end,
        points,
        max_hours,
        skipped: day_buckets.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmployeeId, EntryId, ProjectId};

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    fn entry_on(date: &str, minutes: u64) -> TimeEntry {
        TimeEntry {
            id: EntryId::from("e"),
            employee_id: EmployeeId::from("emp1"),
            project_id: ProjectId::from("p1"),
            task_id: None,
            start_time: None,
            work_date: Some(day(date)),
            created_at: None,
            duration_minutes: minutes,
            cost: None,
        }
    }

    #[test]
    fn week_window_snaps_to_sunday() {
        // 2026-02-11 is a Wednesday; its week is Sun 02-08 .. Sat 02-14.
        let (start, end) = window(SeriesMode::Week, day("2026-02-11"));
        assert_eq!(start, day("2026-02-08"));
        assert_eq!(end, day("2026-02-14"));
        assert_eq!(start.weekday(), Weekday::Sun);
        assert_eq!(end.weekday(), Weekday::Sat);
    }

    #[test]
    fn week_window_anchor_on_sunday_starts_there() {
        let (start, end) = window(SeriesMode::Week, day("2026-02-08"));
        assert_eq!(start, day("2026-02-08"));
        assert_eq!(end, day("2026-02-14"));
    }

    #[test]
    fn month_window_covers_whole_month() {
        let (start, end) = window(SeriesMode::Month, day("2026-02-11"));
        assert_eq!(start, day("2026-02-01"));
        assert_eq!(end, day("2026-02-28"));

        // Leap year February.
        let (start, end) = window(SeriesMode::Month, day("2028-02-15"));
        assert_eq!(start, day("2028-02-01"));
        assert_eq!(end, day("2028-02-29"));

        let (_, end) = window(SeriesMode::Month, day("2026-12-03"));
        assert_eq!(end, day("2026-12-31"));
    }

    #[test]
    fn week_paging_moves_seven_days() {
        assert_eq!(
            page_forward(SeriesMode::Week, day("2026-02-11")),
            day("2026-02-18")
        );
        assert_eq!(
            page_back(SeriesMode::Week, day("2026-02-11")),
            day("2026-02-04")
        );
    }

    #[test]
    fn month_paging_clamps_short_months() {
        // Jan 31 forward lands on Feb 28, not an invalid Feb 31.
        assert_eq!(
            page_forward(SeriesMode::Month, day("2026-01-31")),
            day("2026-02-28")
        );
        assert_eq!(
            page_back(SeriesMode::Month, day("2026-03-31")),
            day("2026-02-28")
        );
    }

    #[test]
    fn series_hours_rounded_to_one_decimal() {
        let entries = vec![entry_on("2026-02-11", 90), entry_on("2026-02-12", 100)];
        let series = build_series(
            &entries,
            SeriesMode::Week,
            day("2026-02-11"),
            SeriesOptions::default(),
        )
        .unwrap();
        assert_eq!(series.points.len(), 7);
        assert_eq!(series.points[3].hours, 1.5); // Wed
        assert_eq!(series.points[4].hours, 1.7); // Thu, 100 min
        assert_eq!(series.max_hours, 1.7);
    }

    #[test]
    fn labels_are_weekday_and_short_date() {
        let series = build_series(
            &[],
            SeriesMode::Week,
            day("2026-02-11"),
            SeriesOptions::default(),
        )
        .unwrap();
        assert_eq!(series.points[0].day_label, "Sun");
        assert_eq!(series.points[0].date_label, "Feb 08");
        assert_eq!(series.points[6].day_label, "Sat");
    }

    #[test]
    fn all_zero_series_scales_flat() {
        let series = build_series(
            &[],
            SeriesMode::Week,
            day("2026-02-11"),
            SeriesOptions::default(),
        )
        .unwrap();
        assert_eq!(series.max_hours, 0.0);
        for point in &series.points {
            assert_eq!(series.scale_factor(point), 0.0);
        }
    }

    #[test]
    fn scale_factor_peaks_at_one() {
        let entries = vec![entry_on("2026-02-11", 240), entry_on("2026-02-12", 120)];
        let series = build_series(
            &entries,
            SeriesMode::Week,
            day("2026-02-11"),
            SeriesOptions::default(),
        )
        .unwrap();
        let wed = &series.points[3];
        let thu = &series.points[4];
        assert_eq!(series.scale_factor(wed), 1.0);
        assert_eq!(series.scale_factor(thu), 0.5);
    }

    #[test]
    fn small_max_scales_against_floor_of_one() {
        // 30 minutes = 0.5h; divisor is max(1, 0.5) = 1.
        let entries = vec![entry_on("2026-02-11", 30)];
        let series = build_series(
            &entries,
            SeriesMode::Week,
            day("2026-02-11"),
            SeriesOptions::default(),
        )
        .unwrap();
        assert_eq!(series.scale_factor(&series.points[3]), 0.5);
    }

    #[test]
    fn zero_weekends_flag_zeroes_sat_sun_only() {
        let entries = vec![
            entry_on("2026-02-08", 60), // Sunday
            entry_on("2026-02-11", 60), // Wednesday
            entry_on("2026-02-14", 60), // Saturday
        ];
        let series = build_series(
            &entries,
            SeriesMode::Week,
            day("2026-02-11"),
            SeriesOptions { zero_weekends: true },
        )
        .unwrap();
        assert_eq!(series.points[0].hours, 0.0);
        assert_eq!(series.points[3].hours, 1.0);
        assert_eq!(series.points[6].hours, 0.0);
        assert_eq!(series.max_hours, 1.0);
    }

    #[test]
    fn month_series_has_one_point_per_day() {
        let series = build_series(
            &[],
            SeriesMode::Month,
            day("2026-02-11"),
            SeriesOptions::default(),
        )
        .unwrap();
        assert_eq!(series.points.len(), 28);
        assert_eq!(series.range_start, day("2026-02-01"));
        assert_eq!(series.range_end, day("2026-02-28"));
    }

    #[test]
    fn paged_recomputation_matches_direct_build() {
        let entries = vec![entry_on("2026-02-18", 45)];
        let next_anchor = page_forward(SeriesMode::Week, day("2026-02-11"));
        let paged = build_series(
            &entries,
            SeriesMode::Week,
            next_anchor,
            SeriesOptions::default(),
        )
        .unwrap();
        let direct = build_series(
            &entries,
            SeriesMode::Week,
            day("2026-02-18"),
            SeriesOptions::default(),
        )
        .unwrap();
        assert_eq!(paged, direct);
        assert_eq!(paged.points[3].hours, 0.8); // 45 min, rounded up
    }
}
