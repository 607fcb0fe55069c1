use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::repo::Workspace;

pub fn run(data_dir: &Path, today: NaiveDate, id: &str, format: Format) -> Result<()> {
    let mut ws = Workspace::open(data_dir, today)?;
    let id = ws.resolve_task_id(id)?;
    let change = ws.planner.toggle_complete(&id);
    output::print_change(change.as_ref(), format)
}
