//! Input records for the analytics engine.
//!
//! These are plain, already-fetched records — the engine performs no I/O
//! and owns no schema. Dates are lenient on the way in: an unparseable
//! `due_date` or timestamp deserializes to `None` rather than failing
//! the whole payload, so a malformed backend row degrades to "no date"
//! instead of an error (a task with no due date is never overdue; an
//! entry with no resolvable timestamp is skipped by the bucketer).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }
    };
}

string_id!(
    /// Opaque backend identifier for a task.
    TaskId, "task"
);
string_id!(
    /// Opaque backend identifier for an employee.
    EmployeeId, "emp"
);
string_id!(
    /// Opaque backend identifier for a project.
    ProjectId, "proj"
);
string_id!(
    /// Opaque backend identifier for a time entry.
    EntryId, "entry"
);

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Stored task status — a closed set of five values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    ToDo,
    Active,
    Completed,
    Cancelled,
    OnHold,
}

impl TaskStatus {
    /// Terminal statuses are past the point where "overdue" applies.
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

/// A task as fetched from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    /// Due date, if any. Unparseable values deserialize to `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    /// Employees this task is assigned to. May be empty.
    #[serde(default)]
    pub assigned_employee_ids: Vec<EmployeeId>,
    #[serde(default)]
    pub estimated_duration_days: Option<u32>,
}

// ---------------------------------------------------------------------------
// Time entries
// ---------------------------------------------------------------------------

/// A logged unit of work against a project (and optionally a task).
///
/// The backend populates at most one of three timestamp fields depending
/// on which screen created the entry; [`TimeEntry::resolved_date`] checks
/// them in priority order rather than assuming a canonical one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: EntryId,
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub task_id: Option<TaskId>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub work_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Logged duration. Never negative (backend invariant).
    pub duration_minutes: u64,
    /// Billed cost for this entry, if costed.
    #[serde(default)]
    pub cost: Option<f64>,
}

impl TimeEntry {
    /// The calendar day this entry belongs to: the first resolvable of
    /// `start_time`, `work_date`, `created_at`, in that order.
    ///
    /// Timestamps are read by their own expressed date component, not
    /// re-projected into a fixed offset.
    pub fn resolved_date(&self) -> Option<NaiveDate> {
        self.start_time
            .map(|t| t.date_naive())
            .or(self.work_date)
            .or_else(|| self.created_at.map(|t| t.date_naive()))
    }
}

// ---------------------------------------------------------------------------
// Team members and projects
// ---------------------------------------------------------------------------

/// A membership record linking an employee to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    /// Department label. Absent or blank routes to "Unassigned".
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl TeamMember {
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (true, true) => self.employee_id.as_str().to_owned(),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (false, false) => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// A project as fetched from the backend. Carried at the boundary for
/// completeness; the aggregations themselves operate on tasks and entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub status: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Lenient date parsing
// ---------------------------------------------------------------------------

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|t| t.date_naive()))
}

fn parse_datetime(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|ndt| ndt.and_utc().fixed_offset())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|ndt| ndt.and_utc().fixed_offset())
        })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_datetime))
}
