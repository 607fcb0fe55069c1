//! The application-state controller.
//!
//! `Planner` owns the task collection and view state, loads both from a
//! [`KvStore`], and is the only place that mutates them. Every applied
//! mutation is written back before the call returns and reported as a
//! [`Change`] naming the dates to redraw.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::dates::{self, week_start};
use crate::error::{PlannerError, Result};
use crate::model::{NewTask, Task, ViewFilter};
use crate::query::{self, DayColumn, Stats};
use crate::rollover::{self, RolledTask};
use crate::store::kv::KvStore;
use crate::store::{tasks as task_store, view as view_store};
use crate::store::view::ViewState;

/// Render signal returned by an applied mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub task_id: String,
    /// Day columns whose contents changed.
    pub dates: Vec<NaiveDate>,
    pub stats: Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

pub struct Planner<S: KvStore> {
    kv: S,
    tasks: Vec<Task>,
    view: ViewState,
    today: NaiveDate,
    last_rollover: Vec<RolledTask>,
}

impl<S: KvStore> Planner<S> {
    /// Load persisted state, repair duplicate ids and run the startup
    /// rollover. Repairs and rollover share a single write.
    pub fn open(kv: S, today: NaiveDate) -> Self {
        let tasks = task_store::load(&kv);
        let current_week = week_start(today);
        let mut view = view_store::load(&kv, current_week);
        view.week_start = week_start(view.week_start).max(current_week);

        let mut planner = Self {
            kv,
            tasks,
            view,
            today,
            last_rollover: Vec::new(),
        };
        let repaired = planner.repair_duplicate_ids();
        planner.last_rollover = rollover::rollover(&mut planner.tasks, today);
        if repaired > 0 || !planner.last_rollover.is_empty() {
            planner.persist_tasks();
        }
        planner
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Tasks moved by the most recent rollover pass.
    pub fn last_rollover(&self) -> &[RolledTask] {
        &self.last_rollover
    }

    pub fn store(&self) -> &S {
        &self.kv
    }

    // --- queries -----------------------------------------------------------

    pub fn visible_tasks(&self) -> Vec<&Task> {
        query::weekday_filter(
            query::visible_tasks(&self.tasks, self.view.week_start),
            self.view.filter,
        )
    }

    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        query::tasks_on(&self.tasks, date, self.view.filter)
    }

    pub fn columns(&self) -> Vec<DayColumn<'_>> {
        query::columns(&self.tasks, self.view.week_start, self.view.filter, self.today)
    }

    pub fn stats(&self) -> Stats {
        query::stats(&self.tasks, self.view.week_start)
    }

    pub fn week_label(&self) -> String {
        dates::week_range_label(self.view.week_start)
    }

    // --- mutations ---------------------------------------------------------

    pub fn add_task(&mut self, mut input: NewTask) -> Result<Change> {
        input.normalize();
        if input.title.is_empty() {
            return Err(PlannerError::EmptyTitle);
        }
        let date = input.date.ok_or(PlannerError::MissingDate)?;

        let task = Task {
            id: self.fresh_id(),
            title: input.title,
            description: input.description,
            date,
            due_date: input.due_date,
            priority: input.priority,
            completed: false,
            rolled_over: false,
            created_at: Utc::now(),
        };
        let id = task.id.clone();
        info!(%id, %date, "added task");
        self.tasks.push(task);
        self.persist_tasks();
        Ok(self.change(id, vec![date]))
    }

    pub fn toggle_complete(&mut self, id: &str) -> Option<Change> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            info!(id, "toggle ignored, task not found");
            return None;
        };
        task.completed = !task.completed;
        let date = task.date;
        debug!(id, completed = task.completed, "toggled task");
        self.persist_tasks();
        Some(self.change(id.to_string(), vec![date]))
    }

    /// Remove a task. Confirmation is the caller's job.
    pub fn delete_task(&mut self, id: &str) -> Option<Change> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            info!(id, "delete ignored, task not found");
            return None;
        };
        let removed = self.tasks.remove(pos);
        info!(id, "deleted task");
        self.persist_tasks();
        Some(self.change(removed.id, vec![removed.date]))
    }

    /// Reschedule a task, e.g. as the drop target of a drag gesture.
    pub fn move_task(&mut self, id: &str, new_date: NaiveDate) -> Option<Change> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            info!(id, "move ignored, task not found");
            return None;
        };
        if task.date == new_date {
            return None;
        }
        let old_date = task.date;
        task.date = new_date;
        info!(id, from = %old_date, to = %new_date, "moved task");
        self.persist_tasks();
        Some(self.change(id.to_string(), vec![old_date, new_date]))
    }

    // --- navigation and settings --------------------------------------------

    /// Step the window a week at a time. Refuses to go before the current week.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let step = match direction {
            Direction::Next => Duration::days(7),
            Direction::Previous => Duration::days(-7),
        };
        let Some(target) = self.view.week_start.checked_add_signed(step) else {
            return false;
        };
        if direction == Direction::Previous && target < week_start(self.today) {
            debug!(%target, "refusing to navigate into a past week");
            return false;
        }
        if query::Window::checked(target).is_none() {
            debug!(%target, "refusing to navigate past the last representable week");
            return false;
        }
        self.set_week_start(target);
        self.run_rollover();
        true
    }

    pub fn go_to_today(&mut self) {
        self.set_week_start(week_start(self.today));
        self.run_rollover();
    }

    pub fn set_view_filter(&mut self, filter: ViewFilter) {
        self.view.filter = filter;
        if let Err(e) = view_store::save_filter(&mut self.kv, filter) {
            warn!(error = %e, "failed to persist view filter");
        }
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.view.dark_mode = !self.view.dark_mode;
        if let Err(e) = view_store::save_dark_mode(&mut self.kv, self.view.dark_mode) {
            warn!(error = %e, "failed to persist dark mode");
        }
        self.view.dark_mode
    }

    // --- internals -----------------------------------------------------------

    fn set_week_start(&mut self, start: NaiveDate) {
        self.view.week_start = start;
        if let Err(e) = view_store::save_week_start(&mut self.kv, start) {
            warn!(error = %e, "failed to persist week start");
        }
    }

    fn run_rollover(&mut self) {
        self.last_rollover = rollover::rollover(&mut self.tasks, self.today);
        if !self.last_rollover.is_empty() {
            self.persist_tasks();
        }
    }

    /// Give every later task sharing an id with an earlier one a fresh id.
    fn repair_duplicate_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut repaired = 0;
        for i in 0..self.tasks.len() {
            if seen.insert(self.tasks[i].id.clone()) {
                continue;
            }
            let id = self.fresh_id();
            warn!(old = %self.tasks[i].id, new = %id, "reassigned duplicate task id");
            seen.insert(id.clone());
            self.tasks[i].id = id;
            repaired += 1;
        }
        repaired
    }

    fn persist_tasks(&mut self) {
        if let Err(e) = task_store::save(&mut self.kv, &self.tasks) {
            warn!(error = %e, "failed to persist tasks, keeping in-memory state");
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.task(&id).is_none() {
                return id;
            }
        }
    }

    fn change(&self, task_id: String, mut dates: Vec<NaiveDate>) -> Change {
        dates.dedup();
        Change {
            task_id,
            dates,
            stats: self.stats(),
        }
    }
}
