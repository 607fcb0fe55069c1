use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::repo::Workspace;

/// Move a task to another day, the command-line stand-in for a drag and drop.
pub fn run(
    data_dir: &Path,
    today: NaiveDate,
    id: &str,
    new_date: NaiveDate,
    format: Format,
) -> Result<()> {
    let mut ws = Workspace::open(data_dir, today)?;
    let id = ws.resolve_task_id(id)?;
    let change = ws.planner.move_task(&id, new_date);
    output::print_change(change.as_ref(), format)
}
