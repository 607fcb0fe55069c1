use std::collections::HashMap;

use crate::error::Result;

/// Minimal persistent key-value contract the planner is written against.
///
/// Values are opaque text (JSON documents in practice). `get` returns `None`
/// for a key that was never written.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store. Counts writes so callers can assert that a no-op
/// mutation did not touch persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

impl<T: KvStore + ?Sized> KvStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_kv_get_set_and_count() {
        let mut kv = MemoryKv::new();
        assert_eq!(kv.get("tasks").unwrap(), None);
        kv.set("tasks", "[]").unwrap();
        kv.set("tasks", "[1]").unwrap();
        assert_eq!(kv.get("tasks").unwrap().as_deref(), Some("[1]"));
        assert_eq!(kv.writes(), 2);
    }

    #[test]
    fn seeded_entries_do_not_count_as_writes() {
        let kv = MemoryKv::new().with_entry("dark_mode", "true");
        assert_eq!(kv.get("dark_mode").unwrap().as_deref(), Some("true"));
        assert_eq!(kv.writes(), 0);
    }
}
