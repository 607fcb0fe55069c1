use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::repo::Workspace;

/// Report what the load-time rollover moved. Opening the workspace runs it.
pub fn run(data_dir: &Path, today: NaiveDate, format: Format) -> Result<()> {
    let ws = Workspace::open(data_dir, today)?;
    output::print_rollover(ws.planner.last_rollover(), format)
}
