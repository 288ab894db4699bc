//! First-write-wins keyed store.

use std::collections::HashMap;

/// Mapping from key to admitted value for one asset kind.
///
/// Once a key is admitted its value is never replaced. All admission
/// decisions go through [`Registry::try_admit`].
#[derive(Debug)]
pub struct Registry<V> {
    entries: HashMap<String, V>,
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Registry<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store `value` under `key` if the key is absent.
    ///
    /// Returns `false` without touching the registry when the key is taken.
    pub fn try_admit(&mut self, key: impl Into<String>, value: V) -> bool {
        match self.entries.entry(key.into()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All admitted keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}
