//! Dashboard snapshot: the per-project numbers every role screen shows.
//!
//! Composes [`status::resolve`] and [`progress::completion_percent`] so
//! the badge counts, the overdue figure, and the completion ring all
//! come from one derivation instead of being recomputed per screen.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::model::Task;
use crate::progress;
use crate::status::{self, StatusCategory};

/// Task counts by effective display category, plus the completion
/// percentage, for one task set at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectSnapshot {
    pub total_tasks: usize,
    pub completion_percent: u8,
    /// A task overdue at `now` counts here, not under its stored status.
    pub overdue: usize,
    pub to_do: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub on_hold: usize,
}

/// Derive the snapshot for `tasks` at `now`.
pub fn project_snapshot(tasks: &[Task], now: DateTime<FixedOffset>) -> ProjectSnapshot {
    let mut snapshot = ProjectSnapshot {
        total_tasks: tasks.len(),
        completion_percent: progress::completion_percent(tasks),
        ..ProjectSnapshot::default()
    };
    for task in tasks {
        match status::resolve(task, now) {
            StatusCategory::Overdue { .. } => snapshot.overdue += 1,
            StatusCategory::ToDo => snapshot.to_do += 1,
            StatusCategory::Active => snapshot.active += 1,
            StatusCategory::Completed => snapshot.completed += 1,
            StatusCategory::Cancelled => snapshot.cancelled += 1,
            StatusCategory::OnHold => snapshot.on_hold += 1,
        }
    }
    snapshot
}
