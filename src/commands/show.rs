use std::path::Path;

use chrono::NaiveDate;

use crate::error::{PlannerError, Result};
use crate::output::{self, Format, Palette};
use crate::store::repo::Workspace;

pub fn run(data_dir: &Path, today: NaiveDate, id: &str, format: Format) -> Result<()> {
    let ws = Workspace::open(data_dir, today)?;
    let id = ws.resolve_task_id(id)?;
    let task = ws
        .planner
        .task(&id)
        .ok_or_else(|| PlannerError::TaskNotFound(id.clone()))?;
    output::print_task(task, format, Palette::new(ws.planner.view().dark_mode))
}
