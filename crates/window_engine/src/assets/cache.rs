//! Reference-counted cache for native resources
//!
//! The cache is the sole owner of every native value it stores. Users hold
//! keys, not values: each assignment of a key to a window acquires one
//! reference and each unassignment releases one. When the count reaches zero
//! the value is handed back to the caller, which destroys it natively.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

struct CacheEntry<V> {
    value: V,
    refs: usize,
}

/// Keyed, reference-counted store of native resources
pub struct ResourceCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    label: &'static str,
}

impl<K, V> ResourceCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create an empty cache; `label` is used in log output
    pub fn new(label: &'static str) -> Self {
        Self {
            entries: HashMap::new(),
            label,
        }
    }

    /// Acquire a reference to `key`, creating the value on first use
    ///
    /// `create` only runs when no live entry exists. If it fails nothing is
    /// stored and no reference is taken.
    pub fn acquire_with<E, F>(&mut self, key: &K, create: F) -> Result<&V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let label = self.label;
        let entry = match self.entries.entry(key.clone()) {
            Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                entry.refs += 1;
                log::debug!("{} cache hit for {:?} (refs: {})", label, key, entry.refs);
                entry
            }
            Entry::Vacant(vacant) => {
                let value = create()?;
                log::debug!("{} cache miss for {:?}, created", label, key);
                vacant.insert(CacheEntry { value, refs: 1 })
            }
        };

        Ok(&entry.value)
    }

    /// Drop one reference; returns the value once nothing references it
    pub fn release(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.get_mut(key)?;
        entry.refs = entry.refs.saturating_sub(1);

        if entry.refs > 0 {
            log::debug!("{} cache release {:?} (refs: {})", self.label, key, entry.refs);
            return None;
        }

        log::debug!("{} cache evict {:?}", self.label, key);
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Get a live value without touching its reference count
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Current reference count for `key` (zero when absent)
    pub fn ref_count(&self, key: &K) -> usize {
        self.entries.get(key).map_or(0, |entry| entry.refs)
    }

    /// Whether a live entry exists for `key`
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry regardless of reference counts (teardown)
    pub fn drain(&mut self) -> Vec<(K, V)> {
        self.entries
            .drain()
            .map(|(key, entry)| (key, entry.value))
            .collect()
    }
}
