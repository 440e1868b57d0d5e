use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::ports::VariableStore;

/// In-memory variable store shared by every clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryVariableStore {
    // Arc<Mutex> so clones handed to separate invocations see the same entries
    vars: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryVariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value under `name`, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Point-in-time copy of all entries, sorted by name.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VariableStore for MemoryVariableStore {
    fn set_var(&self, name: &str, value: String) {
        self.lock().insert(name.to_string(), value);
    }
}

impl Serialize for MemoryVariableStore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}
