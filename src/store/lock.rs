use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::error::{PlannerError, Result};

/// Held for the lifetime of an opened workspace. Unlocks on drop.
#[derive(Debug)]
pub struct DirLock {
    _file: File,
}

/// Take an exclusive, non-blocking lock on `path`.
pub fn acquire_lock(path: &Path) -> Result<DirLock> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    file.try_lock_exclusive()
        .map_err(|_| PlannerError::Locked(path.display().to_string()))?;

    Ok(DirLock { _file: file })
}
