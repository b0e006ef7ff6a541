//! # worktally
//!
//! A task & time analytics engine: pure, synchronous derivations over
//! already-fetched task, time-entry, and team-member records. No I/O,
//! no persistence, no retained state — every call recomputes from its
//! inputs, so the same data always yields the same report.
//!
//! ## Architecture
//!
//! - **Status resolution** (`status`): stored status or derived "Overdue"
//!   with a day count, plus the label/color lookup table
//! - **Progress** (`progress`): completion percentage from a task list
//! - **Day bucketing** (`buckets`): per-calendar-day minute totals over
//!   an inclusive date range
//! - **Productivity series** (`series`): week/month chart windows with
//!   anchor paging and scale normalization, built on `buckets`
//! - **Department rollups** (`department`): per-department task
//!   projections with hour/cost totals
//! - **Snapshots** (`summary`): the per-project dashboard numbers,
//!   composed from `status` and `progress`
//!
//! ## Library usage
//!
//! ```
//! use chrono::NaiveDate;
//! use worktally::series::{self, SeriesMode, SeriesOptions};
//!
//! let anchor = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
//! let week = series::build_series(&[], SeriesMode::Week, anchor, SeriesOptions::default())
//!     .unwrap();
//! assert_eq!(week.points.len(), 7);
//! assert_eq!(week.points[0].day_label, "Sun");
//! ```

pub mod buckets;
pub mod department;
pub mod error;
pub mod model;
pub mod progress;
pub mod series;
pub mod status;
pub mod summary;
