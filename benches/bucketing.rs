//! Benchmarks for the day bucketer and department grouper.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use worktally::buckets;
use worktally::department;
use worktally::model::{
    EmployeeId, EntryId, ProjectId, Task, TaskId, TaskStatus, TeamMember, TimeEntry,
};

const EMPLOYEES: usize = 40;
const DEPARTMENTS: [&str; 4] = ["Eng", "Sales", "Ops", "Support"];

fn month_of_entries(count: usize) -> Vec<TimeEntry> {
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    (0..count)
        .map(|i| TimeEntry {
            id: EntryId::new(format!("e{i}")),
            employee_id: EmployeeId::new(format!("emp{}", i % EMPLOYEES)),
            project_id: ProjectId::from("p1"),
            task_id: None,
            start_time: None,
            work_date: start.checked_add_days(chrono::Days::new((i % 31) as u64)),
            created_at: None,
            duration_minutes: 15 + (i % 8) as u64 * 15,
            cost: Some(10.0 + (i % 5) as f64),
        })
        .collect()
}

fn roster() -> Vec<TeamMember> {
    (0..EMPLOYEES)
        .map(|i| TeamMember {
            employee_id: EmployeeId::new(format!("emp{i}")),
            project_id: ProjectId::from("p1"),
            department: Some(DEPARTMENTS[i % DEPARTMENTS.len()].to_owned()),
            first_name: String::new(),
            last_name: String::new(),
        })
        .collect()
}

fn task_list(count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| Task {
            id: TaskId::new(format!("t{i}")),
            title: format!("task {i}"),
            status: TaskStatus::Active,
            due_date: None,
            created_at: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            assigned_employee_ids: (0..3)
                .map(|j| EmployeeId::new(format!("emp{}", (i * 3 + j) % EMPLOYEES)))
                .collect(),
            estimated_duration_days: None,
        })
        .collect()
}

fn bench_bucket_by_day(c: &mut Criterion) {
    let entries = month_of_entries(5_000);
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();

    c.bench_function("bucket_by_day_5k_month", |bench| {
        bench.iter(|| black_box(buckets::bucket_by_day(&entries, start, end).unwrap()))
    });
}

fn bench_group_by_department(c: &mut Criterion) {
    let entries = month_of_entries(5_000);
    let members = roster();
    let tasks = task_list(200);

    c.bench_function("group_by_department_200x5k", |bench| {
        bench.iter(|| {
            black_box(department::group_by_department(
                &tasks, &members, &entries,
            ))
        })
    });
}

criterion_group!(benches, bench_bucket_by_day, bench_group_by_department);
criterion_main!(benches);
