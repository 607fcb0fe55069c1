use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::repo::Workspace;

fn confirm(title: &str) -> Result<bool> {
    eprint!("Delete task '{title}'? [y/N] ");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

pub fn run(data_dir: &Path, today: NaiveDate, id: &str, yes: bool, format: Format) -> Result<()> {
    let mut ws = Workspace::open(data_dir, today)?;
    let id = ws.resolve_task_id(id)?;

    let Some(title) = ws.planner.task(&id).map(|t| t.title.clone()) else {
        tracing::info!(%id, "delete ignored, task not found");
        return output::print_change(None, format);
    };
    if !yes && !confirm(&title)? {
        return output::print_change(None, format);
    }

    let change = ws.planner.delete_task(&id);
    output::print_change(change.as_ref(), format)
}
