use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde_json::json;

use crate::dates;
use crate::error::Result;
use crate::model::{Priority, Task, ViewFilter};
use crate::planner::Change;
use crate::query::{DayColumn, Stats};
use crate::rollover::RolledTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

/// Colour choices for pretty output; the dark palette uses bright variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    pub dark: bool,
}

impl Palette {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    fn priority(&self, priority: Priority) -> ColoredString {
        let label = priority.to_string();
        match (priority, self.dark) {
            (Priority::High, false) => label.red(),
            (Priority::High, true) => label.bright_red(),
            (Priority::Medium, false) => label.yellow(),
            (Priority::Medium, true) => label.bright_yellow(),
            (Priority::Low, false) => label.green(),
            (Priority::Low, true) => label.bright_green(),
        }
    }

    fn heading(&self, text: &str) -> ColoredString {
        if self.dark {
            text.bright_white().bold()
        } else {
            text.bold()
        }
    }

    fn today(&self, text: &str) -> ColoredString {
        if self.dark {
            text.bright_cyan().bold()
        } else {
            text.blue().bold()
        }
    }
}

/// The snapshot a board renderer needs, borrowed from the planner.
pub struct Board<'a> {
    pub label: String,
    pub filter: ViewFilter,
    pub stats: Stats,
    pub columns: Vec<DayColumn<'a>>,
}

pub fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() > max_len {
        let truncated: String = title.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        title.to_string()
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn task_line(task: &Task, palette: Palette) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let title = if task.completed {
        task.title.strikethrough().dimmed().to_string()
    } else {
        task.title.clone()
    };
    let mut line = format!(
        "{} {} {} {}",
        check,
        short_id(&task.id).dimmed(),
        palette.priority(task.priority),
        title
    );
    if task.rolled_over {
        line.push_str(&format!(" {}", "(rollover)".magenta()));
    }
    if let Some(due) = task.due_date {
        line.push_str(&format!(" due {}", dates::display(due)));
    }
    line
}

pub fn render_task(task: &Task, palette: Palette) -> String {
    let mut out = vec![format!("[{}] {}", task.id, palette.heading(&task.title))];
    match task.description {
        Some(ref desc) => out.push(format!("  {}", desc)),
        None => out.push(format!("  {}", "No description".italic())),
    }
    out.push(format!("  priority: {}", palette.priority(task.priority)));
    out.push(format!("  date: {}", dates::display(task.date)));
    if let Some(due) = task.due_date {
        out.push(format!("  due: {}", dates::display(due)));
    }
    let status = if task.completed { "completed" } else { "pending" };
    out.push(format!("  status: {}", status));
    if task.rolled_over {
        out.push("  rolled over: yes (from a previous week)".to_string());
    }
    out.push(format!("  created: {}", dates::display(task.created_at.date_naive())));
    out.join("\n")
}

pub fn print_task(task: &Task, format: Format, palette: Palette) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(task)?),
        Format::Pretty => println!("{}", render_task(task, palette)),
        Format::Minimal => println!("{}", minimal_row(task)),
    }
    Ok(())
}

fn minimal_row(task: &Task) -> String {
    format!(
        "{:8} {:10} {:6} {:5} {}",
        short_id(&task.id),
        dates::iso(task.date),
        task.priority.to_string(),
        if task.completed { "done" } else { "-" },
        truncate_title(&task.title, 32)
    )
}

pub fn print_tasks(tasks: &[&Task], format: Format, palette: Palette) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(tasks)?),
        Format::Pretty => {
            if tasks.is_empty() {
                println!("{}", "No tasks".dimmed());
            }
            for task in tasks {
                println!("{}", task_line(task, palette));
            }
        }
        Format::Minimal => {
            println!("{:8} {:10} {:6} {:5} TITLE", "ID", "DATE", "PRIO", "DONE");
            println!("{}", "-".repeat(50));
            for task in tasks {
                println!("{}", minimal_row(task));
            }
        }
    }
    Ok(())
}

pub fn render_board(board: &Board<'_>, palette: Palette) -> String {
    let mut out = vec![palette.heading(&board.label).to_string()];
    out.push(format!("{} ({} view)", board.stats, board.filter));

    let mut in_next_week = None;
    for column in &board.columns {
        if in_next_week != Some(column.next_week) {
            in_next_week = Some(column.next_week);
            let title = if column.next_week { "Next Week" } else { "This Week" };
            out.push(String::new());
            out.push(format!("== {} ==", palette.heading(title)));
        }
        let header = format!(
            "{} {}",
            dates::day_name(column.date),
            dates::display(column.date)
        );
        if column.is_today {
            out.push(format!("{} {}", palette.today(&header), "(today)".dimmed()));
        } else {
            out.push(header);
        }
        for task in &column.tasks {
            out.push(format!("  {}", task_line(task, palette)));
        }
    }
    out.join("\n")
}

pub fn print_board(board: &Board<'_>, format: Format, palette: Palette) -> Result<()> {
    match format {
        Format::Json => println!(
            "{}",
            json!({
                "range": board.label,
                "filter": board.filter,
                "stats": board.stats,
                "columns": board.columns,
            })
        ),
        Format::Pretty => println!("{}", render_board(board, palette)),
        Format::Minimal => {
            let tasks: Vec<&Task> = board.columns.iter().flat_map(|c| c.tasks.clone()).collect();
            print_tasks(&tasks, Format::Minimal, palette)?;
            println!("{}", board.stats);
        }
    }
    Ok(())
}

/// Report a mutation result. `None` means nothing changed.
pub fn print_change(change: Option<&Change>, format: Format) -> Result<()> {
    match (format, change) {
        (Format::Json, Some(change)) => println!("{}", serde_json::to_string(change)?),
        (Format::Json, None) => println!("{}", json!({ "changed": false })),
        (_, Some(change)) => {
            let days: Vec<String> = change.dates.iter().map(|d| dates::iso(*d)).collect();
            println!("{} [{}] {}", change.task_id, days.join(", "), change.stats);
        }
        (_, None) => println!("{}", "no change".dimmed()),
    }
    Ok(())
}

pub fn print_rollover(moved: &[RolledTask], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(moved)?),
        _ => {
            if moved.is_empty() {
                println!("{}", "nothing to roll over".dimmed());
            }
            for entry in moved {
                println!("{} {} -> {}", short_id(&entry.id), entry.from, entry.to);
            }
        }
    }
    Ok(())
}
