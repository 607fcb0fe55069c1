//! Read-side views over the task collection: the two-week window, the
//! weekday-only filter, per-day columns and completion stats.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::dates::is_weekend;
use crate::model::{Task, ViewFilter};

pub const WINDOW_DAYS: i64 = 14;

/// Half-open `[start, start + 14 days)` span: this week plus next week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: NaiveDate,
}

impl Window {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// `None` when the window would run past the last representable date.
    pub fn checked(start: NaiveDate) -> Option<Self> {
        start.checked_add_signed(Duration::days(WINDOW_DAYS))?;
        Some(Self { start })
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(WINDOW_DAYS)
    }

    pub fn next_week_start(&self) -> NaiveDate {
        self.start + Duration::days(7)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let start = self.start;
        (0..WINDOW_DAYS).map(move |offset| start + Duration::days(offset))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub completed: usize,
    pub total: usize,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {} tasks completed", self.completed, self.total)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub next_week: bool,
    pub tasks: Vec<&'a Task>,
}

fn sort_for_display(tasks: &mut [&Task]) {
    // stable: equal (date, priority) keep insertion order
    tasks.sort_by_key(|t| (t.date, t.priority));
}

/// Tasks inside the window, ordered by date, then priority, then insertion.
pub fn visible_tasks(tasks: &[Task], week_start: NaiveDate) -> Vec<&Task> {
    let window = Window::new(week_start);
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| window.contains(t.date)).collect();
    sort_for_display(&mut visible);
    visible
}

/// Drop weekend-dated tasks from a view under `ViewFilter::Weekdays`.
pub fn weekday_filter(tasks: Vec<&Task>, mode: ViewFilter) -> Vec<&Task> {
    match mode {
        ViewFilter::All => tasks,
        ViewFilter::Weekdays => tasks.into_iter().filter(|t| !is_weekend(t.date)).collect(),
    }
}

/// Ordered tasks for a single day. A hidden weekend day has no tasks.
pub fn tasks_on(tasks: &[Task], date: NaiveDate, mode: ViewFilter) -> Vec<&Task> {
    if mode == ViewFilter::Weekdays && is_weekend(date) {
        return Vec::new();
    }
    let mut day: Vec<&Task> = tasks.iter().filter(|t| t.date == date).collect();
    sort_for_display(&mut day);
    day
}

/// The rendered columns of the board, weekend columns omitted under
/// `ViewFilter::Weekdays`.
pub fn columns(
    tasks: &[Task],
    week_start: NaiveDate,
    mode: ViewFilter,
    today: NaiveDate,
) -> Vec<DayColumn<'_>> {
    let window = Window::new(week_start);
    let next_week = window.next_week_start();
    window
        .days()
        .filter(|date| mode == ViewFilter::All || !is_weekend(*date))
        .map(|date| DayColumn {
            date,
            is_today: date == today,
            next_week: date >= next_week,
            tasks: tasks_on(tasks, date, mode),
        })
        .collect()
}

/// Completion over the whole window. Ignores the view filter.
pub fn stats(tasks: &[Task], week_start: NaiveDate) -> Stats {
    let visible = visible_tasks(tasks, week_start);
    Stats {
        completed: visible.iter().filter(|t| t.completed).count(),
        total: visible.len(),
    }
}
