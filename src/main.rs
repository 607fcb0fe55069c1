use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use weekplan::dates;
use weekplan::model::{NewTask, Priority, ViewFilter};
use weekplan::output::Format;
use weekplan::planner::Direction;

#[derive(Parser)]
#[command(
    name = "weekplan",
    version,
    about = "Two-week task planner with automatic rollover of unfinished work"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    format: Format,
    /// Data directory holding the planner state
    #[arg(long, global = true, env = "WEEKPLAN_DIR", default_value = ".weekplan")]
    data_dir: PathBuf,
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "WEEKPLAN_TODAY", hide = true, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,
    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task to a day
    Add {
        /// Day to schedule the task on (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
        /// Task title
        title: String,
        /// Task description
        #[arg(long, short)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        due: Option<NaiveDate>,
        /// Task priority
        #[arg(long, short, value_enum, default_value = "medium")]
        priority: Priority,
    },
    /// Mark a task complete, or reopen it
    Toggle {
        /// Task ID (unique prefix accepted)
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID (unique prefix accepted)
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Move a task to another day
    Move {
        /// Task ID (unique prefix accepted)
        id: String,
        /// Target day (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },
    /// Display a single task
    Show {
        /// Task ID (unique prefix accepted)
        id: String,
    },
    /// Show the two-week board
    Week,
    /// List the tasks of one day
    Day {
        /// Day to list (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },
    /// Advance the board by one week
    Next,
    /// Go back one week (never before the current week)
    Prev,
    /// Jump back to the current week
    Today,
    /// Choose whether weekends are shown
    Filter {
        #[arg(value_enum)]
        mode: ViewFilter,
    },
    /// Toggle the dark colour palette
    DarkMode,
    /// Completion stats for the visible two weeks
    Stats,
    /// Show the tasks rolled over when the planner was loaded
    Rollover,
}

fn parse_date_arg(input: &str) -> Result<NaiveDate, String> {
    dates::parse_date(input).map_err(|e| e.to_string())
}

fn run(cli: Cli, format: Format) -> weekplan::error::Result<()> {
    let dir = cli.data_dir.as_path();
    let today = cli.today.unwrap_or_else(dates::today);

    match cli.command {
        Commands::Add {
            date,
            title,
            description,
            due,
            priority,
        } => {
            let input = NewTask {
                date: Some(date),
                title,
                description,
                due_date: due,
                priority,
            };
            weekplan::commands::add::run(dir, today, input, format)
        }
        Commands::Toggle { id } => weekplan::commands::toggle::run(dir, today, &id, format),
        Commands::Delete { id, yes } => {
            weekplan::commands::delete::run(dir, today, &id, yes, format)
        }
        Commands::Move { id, date } => {
            weekplan::commands::reschedule::run(dir, today, &id, date, format)
        }
        Commands::Show { id } => weekplan::commands::show::run(dir, today, &id, format),
        Commands::Week => weekplan::commands::week::show(dir, today, format),
        Commands::Day { date } => weekplan::commands::day::run(dir, today, date, format),
        Commands::Next => weekplan::commands::week::navigate(dir, today, Direction::Next, format),
        Commands::Prev => {
            weekplan::commands::week::navigate(dir, today, Direction::Previous, format)
        }
        Commands::Today => weekplan::commands::week::today(dir, today, format),
        Commands::Filter { mode } => weekplan::commands::filter::run(dir, today, mode, format),
        Commands::DarkMode => weekplan::commands::settings::toggle_dark_mode(dir, today, format),
        Commands::Stats => weekplan::commands::stats::run(dir, today, format),
        Commands::Rollover => weekplan::commands::rollover::run(dir, today, format),
    }
}

fn main() {
    let cli = Cli::parse();
    weekplan::logging::init(&cli.log_level);
    let format = cli.format;
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
