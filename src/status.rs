//! Display status resolution: stored status or a derived "Overdue".
//!
//! A task is overdue when it has a due date, its stored status is not
//! terminal, and the due date is strictly past `now` at day granularity.
//! A due date equal to today's date is NOT overdue. Tasks without a due
//! date (including due dates the backend sent malformed — those parse
//! to `None`) are never overdue.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::model::{Task, TaskStatus};

// ---------------------------------------------------------------------------
// Status categories
// ---------------------------------------------------------------------------

/// Effective display category for a task: its stored status, or
/// `Overdue` with a whole-day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    ToDo,
    Active,
    Completed,
    Cancelled,
    OnHold,
    Overdue {
        /// Whole days past the due date, minimum 1.
        days: u32,
    },
}

impl From<TaskStatus> for StatusCategory {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::ToDo => StatusCategory::ToDo,
            TaskStatus::Active => StatusCategory::Active,
            TaskStatus::Completed => StatusCategory::Completed,
            TaskStatus::Cancelled => StatusCategory::Cancelled,
            TaskStatus::OnHold => StatusCategory::OnHold,
        }
    }
}

impl StatusCategory {
    /// Display label and color for this category.
    ///
    /// A closed-enum lookup so adding or renaming a status is a
    /// one-line change, rather than string comparisons scattered
    /// through the presentation layer.
    pub fn style(&self) -> StatusStyle {
        match self {
            StatusCategory::ToDo => StatusStyle {
                label: "To Do",
                color: "#9E9E9E",
            },
            StatusCategory::Active => StatusStyle {
                label: "Active",
                color: "#2196F3",
            },
            StatusCategory::Completed => StatusStyle {
                label: "Completed",
                color: "#4CAF50",
            },
            StatusCategory::Cancelled => StatusStyle {
                label: "Cancelled",
                color: "#757575",
            },
            StatusCategory::OnHold => StatusStyle {
                label: "On Hold",
                color: "#FF9800",
            },
            StatusCategory::Overdue { .. } => StatusStyle {
                label: "Overdue",
                color: "#F44336",
            },
        }
    }

    /// Badge text for list rows: the label, with the day count for
    /// overdue tasks ("Overdue by 3 days").
    pub fn badge_text(&self) -> String {
        match self {
            StatusCategory::Overdue { days: 1 } => "Overdue by 1 day".to_owned(),
            StatusCategory::Overdue { days } => format!("Overdue by {days} days"),
            other => other.style().label.to_owned(),
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, StatusCategory::Overdue { .. })
    }
}

/// Presentation hints for a status category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub label: &'static str,
    /// Hex RGB color for badges and chart slices.
    pub color: &'static str,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Derive the effective display category for a task at `now`.
///
/// Pure and idempotent: identical inputs always produce the same
/// category. Day counts come from the calendar-date difference, so a
/// due date three days back resolves to `Overdue { days: 3 }`.
pub fn resolve(task: &Task, now: DateTime<FixedOffset>) -> StatusCategory {
    if task.status.is_terminal() {
        return task.status.into();
    }
    let Some(due) = task.due_date else {
        return task.status.into();
    };
    let today = now.date_naive();
    if due < today {
        let days = (today - due).num_days().max(1) as u32;
        StatusCategory::Overdue { days }
    } else {
        task.status.into()
    }
}
