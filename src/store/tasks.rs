use tracing::warn;

use crate::error::Result;
use crate::model::Task;
use crate::store::kv::KvStore;

pub const TASKS_KEY: &str = "tasks";

/// Load the full task collection.
///
/// A missing or unreadable document yields an empty collection; the planner
/// must still start when the stored blob is corrupt.
pub fn load(kv: &impl KvStore) -> Vec<Task> {
    let raw = match kv.get(TASKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read task collection, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!(error = %e, "stored task collection is malformed, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite the stored collection with a full snapshot.
pub fn save(kv: &mut impl KvStore, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    kv.set(TASKS_KEY, &json)
}
