use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::NewTask;
use crate::output::{self, Format, Palette};
use crate::store::repo::Workspace;

pub fn run(data_dir: &Path, today: NaiveDate, input: NewTask, format: Format) -> Result<()> {
    let mut ws = Workspace::open(data_dir, today)?;
    let change = ws.planner.add_task(input)?;
    let palette = Palette::new(ws.planner.view().dark_mode);
    match ws.planner.task(&change.task_id) {
        Some(task) if format != Format::Minimal => output::print_task(task, format, palette),
        _ => output::print_change(Some(&change), format),
    }
}
