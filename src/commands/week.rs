use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::output::{self, Board, Format, Palette};
use crate::planner::{Direction, Planner};
use crate::store::kv::KvStore;
use crate::store::repo::Workspace;

pub(crate) fn print_board<S: KvStore>(planner: &Planner<S>, format: Format) -> Result<()> {
    let view = planner.view();
    let board = Board {
        label: planner.week_label(),
        filter: view.filter,
        stats: planner.stats(),
        columns: planner.columns(),
    };
    output::print_board(&board, format, Palette::new(view.dark_mode))
}

/// Show the two-week board at the stored week pointer.
pub fn show(data_dir: &Path, today: NaiveDate, format: Format) -> Result<()> {
    let ws = Workspace::open(data_dir, today)?;
    print_board(&ws.planner, format)
}

pub fn navigate(
    data_dir: &Path,
    today: NaiveDate,
    direction: Direction,
    format: Format,
) -> Result<()> {
    let mut ws = Workspace::open(data_dir, today)?;
    if !ws.planner.navigate(direction) {
        eprintln!("already at the current week");
    }
    print_board(&ws.planner, format)
}

pub fn today(data_dir: &Path, today: NaiveDate, format: Format) -> Result<()> {
    let mut ws = Workspace::open(data_dir, today)?;
    ws.planner.go_to_today();
    print_board(&ws.planner, format)
}
