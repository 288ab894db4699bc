//! Publish sinks and the host-owned resource table they forward into.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::PublishError;

/// Receives each newly admitted entry exactly once.
///
/// Implementations must not panic on duplicates; the coordinator treats any
/// returned error as a diagnostic only.
pub trait PublishSink<V>: Send + Sync {
    fn publish(&self, key: &str, value: V) -> Result<(), PublishError>;
}

impl<V, F> PublishSink<V> for F
where
    F: Fn(&str, V) -> Result<(), PublishError> + Send + Sync,
{
    fn publish(&self, key: &str, value: V) -> Result<(), PublishError> {
        self(key, value)
    }
}

/// A shared, process-wide key/value table owned by the host.
///
/// Inserts are first-write-wins. Callers outside the registration pipeline may
/// write to the same table, so the pipeline never assumes it is the only writer.
#[derive(Debug)]
pub struct ResourceTable<V> {
    name: &'static str,
    entries: RwLock<HashMap<String, V>>,
}

impl<V: Clone> ResourceTable<V> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Insert `value` under `key` unless the key is already present.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn insert_if_absent(&self, key: impl Into<String>, value: V) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        match entries.entry(key.into()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }
}
