use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::output::{self, Format, Palette};
use crate::store::repo::Workspace;

/// Ordered tasks for one date, honouring the weekday-only filter.
pub fn run(data_dir: &Path, today: NaiveDate, date: NaiveDate, format: Format) -> Result<()> {
    let ws = Workspace::open(data_dir, today)?;
    let tasks = ws.planner.tasks_on(date);
    output::print_tasks(&tasks, format, Palette::new(ws.planner.view().dark_mode))
}
