//! Pure statistics folds over fetched task collections.

use crate::task::domain::{DepartmentId, Task};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Department label used when a task's department cannot be resolved.
const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Status label marking completed work.
const STATUS_DONE: &str = "done";

/// Conventional status labels tracked individually on the dashboard.
const STATUS_TODO: &str = "todo";
const STATUS_IN_PROGRESS: &str = "in-progress";
const STATUS_REVIEW: &str = "review";

/// Counts for the conventional status lanes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    /// Tasks with status `todo`.
    pub pending: usize,
    /// Tasks with status `in-progress`.
    pub in_progress: usize,
    /// Tasks with status `review`.
    pub review: usize,
    /// Tasks with status `done`.
    pub completed: usize,
}

/// Aggregated dashboard statistics.
///
/// Recomputed fully on every invocation; no ordering guarantees beyond
/// what the source collection provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Total number of tasks in the collection.
    pub total: usize,
    /// Tasks whose due date has passed and whose status is not `done`.
    pub overdue: usize,
    /// Tasks with status `done`.
    pub completed: usize,
    /// Tasks with any status other than `done`.
    pub open: usize,
    /// Per-lane breakdown of the conventional statuses.
    pub by_status: StatusBreakdown,
    /// Task counts grouped by raw status label, free-form labels included.
    pub status_counts: BTreeMap<String, usize>,
    /// Task counts grouped by department name; unresolvable departments
    /// are grouped under `"Unknown"`.
    pub by_department: BTreeMap<String, usize>,
}

impl TaskStats {
    /// Computes statistics over an already-fetched task collection.
    ///
    /// `department_names` resolves department identifiers to display
    /// names; `today` anchors the overdue check.
    #[must_use]
    pub fn compute(
        tasks: &[Task],
        department_names: &BTreeMap<DepartmentId, String>,
        today: NaiveDate,
    ) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };

        for task in tasks {
            if task.status() == STATUS_DONE {
                stats.completed += 1;
            } else {
                stats.open += 1;
            }
            if is_overdue(task, today) {
                stats.overdue += 1;
            }
            match task.status() {
                STATUS_TODO => stats.by_status.pending += 1,
                STATUS_IN_PROGRESS => stats.by_status.in_progress += 1,
                STATUS_REVIEW => stats.by_status.review += 1,
                STATUS_DONE => stats.by_status.completed += 1,
                _ => {}
            }
            *stats
                .status_counts
                .entry(task.status().to_owned())
                .or_default() += 1;

            let department = department_names
                .get(&task.department_id())
                .map_or(UNKNOWN_DEPARTMENT, String::as_str);
            *stats.by_department.entry(department.to_owned()).or_default() += 1;
        }

        stats
    }
}

/// Returns whether a task is overdue: due before `today` and not done.
#[must_use]
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    task.due_date()
        .is_some_and(|due| due < today && task.status() != STATUS_DONE)
}
