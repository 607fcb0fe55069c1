use std::path::Path;

use chrono::NaiveDate;

use crate::commands::week::print_board;
use crate::error::Result;
use crate::model::ViewFilter;
use crate::output::Format;
use crate::store::repo::Workspace;

pub fn run(data_dir: &Path, today: NaiveDate, filter: ViewFilter, format: Format) -> Result<()> {
    let mut ws = Workspace::open(data_dir, today)?;
    ws.planner.set_view_filter(filter);
    print_board(&ws.planner, format)
}
