use std::path::Path;

use chrono::NaiveDate;

use crate::error::{PlannerError, Result};
use crate::planner::Planner;
use crate::store::files::FileKv;
use crate::store::lock::{self, DirLock};

pub const LOCK_FILE: &str = "weekplan.lock";

/// A data directory opened for one command: the planner plus the directory
/// lock that keeps other processes out until it is dropped.
pub struct Workspace {
    pub planner: Planner<FileKv>,
    _lock: DirLock,
}

impl Workspace {
    /// Open (creating if needed) a data directory and load the planner as of `today`.
    pub fn open(data_dir: &Path, today: NaiveDate) -> Result<Self> {
        let kv = FileKv::open(data_dir)?;
        let lock = lock::acquire_lock(&kv.root().join(LOCK_FILE))?;
        let planner = Planner::open(kv, today);
        Ok(Self {
            planner,
            _lock: lock,
        })
    }

    /// Resolve a user-supplied id to a stored task id.
    ///
    /// Exact match wins; otherwise a unique prefix is accepted. An input that
    /// matches nothing is returned unchanged so mutations stay no-ops.
    pub fn resolve_task_id(&self, input: &str) -> Result<String> {
        let ids: Vec<&str> = self.planner.tasks().iter().map(|t| t.id.as_str()).collect();
        resolve_task_id_input(input, &ids)
    }
}

/// Shared exact-or-prefix resolver for task id inputs.
pub fn resolve_task_id_input(input: &str, existing_ids: &[&str]) -> Result<String> {
    let raw = input.trim();
    if existing_ids.contains(&raw) {
        return Ok(raw.to_string());
    }
    if raw.is_empty() {
        return Ok(raw.to_string());
    }

    let matches: Vec<&&str> = existing_ids
        .iter()
        .filter(|id| id.starts_with(raw))
        .collect();
    match matches.as_slice() {
        [only] => Ok((**only).to_string()),
        [] => Ok(raw.to_string()),
        many => Err(PlannerError::AmbiguousTaskId(raw.to_string(), many.len())),
    }
}
