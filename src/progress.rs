//! Project completion percentage from a task list.

use crate::model::{Task, TaskStatus};

/// Completion percentage in `[0, 100]`: completed tasks over total,
/// rounded to the nearest integer with halves rounding up. An empty
/// task list is 0%.
///
/// Only `Completed` counts — no partial credit for Active/OnHold, and
/// no placeholder values: the same task list always yields the same
/// percentage.
pub fn completion_percent(tasks: &[Task]) -> u8 {
    let total = tasks.len() as u64;
    if total == 0 {
        return 0;
    }
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count() as u64;
    // Integer half-up rounding of completed / total * 100.
    ((completed * 200 + total) / (total * 2)) as u8
}
