use std::path::Path;

use chrono::NaiveDate;
use serde_json::json;

use crate::error::Result;
use crate::output::Format;
use crate::store::repo::Workspace;

pub fn run(data_dir: &Path, today: NaiveDate, format: Format) -> Result<()> {
    let ws = Workspace::open(data_dir, today)?;
    let stats = ws.planner.stats();
    match format {
        Format::Json => println!(
            "{}",
            json!({
                "range": ws.planner.week_label(),
                "completed": stats.completed,
                "total": stats.total,
            })
        ),
        Format::Pretty => {
            println!("{}", ws.planner.week_label());
            println!("{stats}");
        }
        Format::Minimal => println!("{}/{}", stats.completed, stats.total),
    }
    Ok(())
}
