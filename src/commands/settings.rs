use std::path::Path;

use chrono::NaiveDate;
use serde_json::json;

use crate::error::Result;
use crate::output::Format;
use crate::store::repo::Workspace;

/// Flip the dark palette used for pretty output.
pub fn toggle_dark_mode(data_dir: &Path, today: NaiveDate, format: Format) -> Result<()> {
    let mut ws = Workspace::open(data_dir, today)?;
    let dark = ws.planner.toggle_dark_mode();
    match format {
        Format::Json => println!("{}", json!({ "darkMode": dark })),
        _ => println!("dark mode {}", if dark { "on" } else { "off" }),
    }
    Ok(())
}
