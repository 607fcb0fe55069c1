//! One-shot rescheduling of overdue work.
//!
//! An incomplete task dated before today moves to the Monday after its own
//! date and is marked `rolled_over`. A task is rolled at most once; if it goes
//! stale again only a manual move or completion changes it.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::dates::next_monday;
use crate::model::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolledTask {
    pub id: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && !task.rolled_over && task.date < today
}

/// Roll every eligible task in place and report what moved.
///
/// The caller persists once when the report is non-empty.
pub fn rollover(tasks: &mut [Task], today: NaiveDate) -> Vec<RolledTask> {
    let mut moved = Vec::new();
    for task in tasks.iter_mut().filter(|t| is_overdue(t, today)) {
        let from = task.date;
        let to = next_monday(from);
        task.date = to;
        task.rolled_over = true;
        info!(id = %task.id, %from, %to, "rolled over incomplete task");
        moved.push(RolledTask {
            id: task.id.clone(),
            from,
            to,
        });
    }
    moved
}
