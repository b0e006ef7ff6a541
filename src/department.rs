//! Department grouping: task projections and per-department rollups.
//!
//! A task assigned across N distinct departments appears once in each of
//! those N buckets as a projection carrying only that department's
//! assignees — the task's identity is never double-counted inside one
//! bucket, but every relevant department still reports it. Employees
//! with no membership record, blank department labels, and tasks with no
//! assignees all route to the synthetic "Unassigned" bucket.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::buckets::hours_from_minutes;
use crate::model::{EmployeeId, Task, TaskId, TaskStatus, TeamMember, TimeEntry};

/// Bucket label for employees without a department (or without a
/// membership record at all) and for tasks with no assignees.
pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";

// ---------------------------------------------------------------------------
// Member index
// ---------------------------------------------------------------------------

/// Keyed lookup over team membership records.
///
/// Tasks reference employees by id, not by embedded objects; this index
/// resolves those references without walking the member list per task.
/// The first record for an employee wins when duplicates appear.
#[derive(Debug)]
pub struct MemberIndex<'a> {
    members: &'a [TeamMember],
    by_employee: HashMap<&'a EmployeeId, usize>,
}

impl<'a> MemberIndex<'a> {
    pub fn new(members: &'a [TeamMember]) -> Self {
        let mut by_employee = HashMap::with_capacity(members.len());
        for (idx, member) in members.iter().enumerate() {
            by_employee.entry(&member.employee_id).or_insert(idx);
        }
        Self {
            members,
            by_employee,
        }
    }

    pub fn get(&self, employee_id: &EmployeeId) -> Option<&'a TeamMember> {
        self.by_employee
            .get(employee_id)
            .map(|&idx| &self.members[idx])
    }

    /// The department an employee rolls up under. Unknown employees and
    /// blank department labels resolve to [`UNASSIGNED_DEPARTMENT`].
    pub fn department_of(&self, employee_id: &EmployeeId) -> &'a str {
        self.get(employee_id)
            .and_then(|m| m.department.as_deref())
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(UNASSIGNED_DEPARTMENT)
    }
}

// ---------------------------------------------------------------------------
// Projections and rollups
// ---------------------------------------------------------------------------

/// A task narrowed to one department's subset of assignees. All other
/// fields are the task's own; only `assignees` differs from the source
/// record. Transient — exists only for department-scoped reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskProjection {
    pub task_id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    pub estimated_duration_days: Option<u32>,
    /// The assignees belonging to this projection's department.
    pub assignees: Vec<EmployeeId>,
}

impl TaskProjection {
    fn of(task: &Task, assignees: Vec<EmployeeId>) -> Self {
        Self {
            task_id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            due_date: task.due_date,
            created_at: task.created_at,
            estimated_duration_days: task.estimated_duration_days,
            assignees,
        }
    }
}

/// One department's view: its task projections and hour/cost totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRollup {
    pub department: String,
    pub tasks: Vec<TaskProjection>,
    /// Raw minutes behind `total_hours`.
    pub total_minutes: u64,
    /// Hours, rounded to one decimal.
    pub total_hours: f64,
    /// Summed entry costs, rounded to two decimals.
    pub total_cost: f64,
}

/// Split tasks by assignee department and roll up logged hours/cost per
/// department.
///
/// Buckets appear in first-seen order (stable given identical input
/// order); duplicate department labels merge into one bucket. A bucket's
/// hour/cost totals cover the time entries of the distinct employees
/// appearing in its projections.
pub fn group_by_department(
    tasks: &[Task],
    team_members: &[TeamMember],
    time_entries: &[TimeEntry],
) -> Vec<DepartmentRollup> {
    // First-seen bucket order, merged by label.
    fn push_projection<'m>(
        order: &mut Vec<&'m str>,
        grouped: &mut HashMap<&'m str, Vec<TaskProjection>>,
        dept: &'m str,
        projection: TaskProjection,
    ) {
        if !grouped.contains_key(dept) {
            order.push(dept);
        }
        grouped.entry(dept).or_default().push(projection);
    }

    let index = MemberIndex::new(team_members);

    let mut order: Vec<&str> = Vec::new();
    let mut grouped: HashMap<&str, Vec<TaskProjection>> = HashMap::new();

    for task in tasks {
        if task.assigned_employee_ids.is_empty() {
            tracing::trace!(task = %task.id, "no assignees, routing to Unassigned");
            push_projection(
                &mut order,
                &mut grouped,
                UNASSIGNED_DEPARTMENT,
                TaskProjection::of(task, Vec::new()),
            );
            continue;
        }

        // Partition this task's assignees by department, keeping the
        // departments in the order the assignee list introduces them.
        let mut dept_order: Vec<&str> = Vec::new();
        let mut partitions: HashMap<&str, Vec<EmployeeId>> = HashMap::new();
        for employee_id in &task.assigned_employee_ids {
            let dept = index.department_of(employee_id);
            if !partitions.contains_key(dept) {
                dept_order.push(dept);
            }
            partitions.entry(dept).or_default().push(employee_id.clone());
        }

        for dept in dept_order {
            let assignees = partitions.remove(dept).unwrap_or_default();
            push_projection(
                &mut order,
                &mut grouped,
                dept,
                TaskProjection::of(task, assignees),
            );
        }
    }

    order
        .into_iter()
        .map(|dept| {
            let projections = grouped.remove(dept).unwrap_or_default();
            let employees: HashSet<&EmployeeId> = projections
                .iter()
                .flat_map(|p| p.assignees.iter())
                .collect();

            let mut total_minutes = 0u64;
            let mut total_cost = 0f64;
            for entry in time_entries {
                if employees.contains(&entry.employee_id) {
                    total_minutes += entry.duration_minutes;
                    total_cost += entry.cost.unwrap_or(0.0);
                }
            }

            DepartmentRollup {
                department: dept.to_owned(),
                tasks: projections,
                total_minutes,
                total_hours: hours_from_minutes(total_minutes),
                total_cost: (total_cost * 100.0).round() / 100.0,
            }
        })
        .collect()
}
