//! Insertion-ordered map

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

struct Inner<K, V> {
    /// First-insertion order; same key set as `values`
    keys: Vec<K>,
    values: HashMap<K, V>,
}

/// A map that remembers the order in which keys were first inserted.
///
/// Updating an existing key keeps its position. Deleting a key and
/// inserting it again moves it to the end.
///
/// ```
/// use safe_toolkit::OrderedMap;
///
/// let map = OrderedMap::new();
/// map.set("a", 1);
/// map.set("b", 2);
/// map.delete(&"a");
/// map.set("a", 3);
///
/// assert_eq!(map.keys(), vec!["b", "a"]);
/// assert_eq!(map.get(&"a"), Some(3));
/// ```
pub struct OrderedMap<K, V> {
    inner: RwLock<Inner<K, V>>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                keys: Vec::new(),
                values: HashMap::new(),
            }),
        }
    }

    /// Insert or overwrite. A new key is appended to the order; an existing
    /// key keeps its position.
    pub fn set(&self, key: K, value: V) {
        let mut inner = self.inner.write();
        if !inner.values.contains_key(&key) {
            inner.keys.push(key.clone());
        }
        inner.values.insert(key, value);
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().values.get(key).cloned()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().values.contains_key(key)
    }

    /// Remove a key, returning its value. Later keys shift up one
    /// position, which is O(n) in the number of keys.
    pub fn delete(&self, key: &K) -> Option<V> {
        let mut inner = self.inner.write();
        let value = inner.values.remove(key)?;
        if let Some(pos) = inner.keys.iter().position(|k| k == key) {
            inner.keys.remove(pos);
        }
        Some(value)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().keys.clone()
    }

    /// Values in key insertion order
    pub fn values(&self) -> Vec<V> {
        let inner = self.inner.read();
        inner
            .keys
            .iter()
            .filter_map(|k| inner.values.get(k).cloned())
            .collect()
    }

    /// Key/value pairs in insertion order, from a single snapshot
    pub fn entries(&self) -> Vec<(K, V)> {
        let inner = self.inner.read();
        inner
            .keys
            .iter()
            .filter_map(|k| inner.values.get(k).map(|v| (k.clone(), v.clone())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().keys.is_empty()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.keys.clear();
        inner.values.clear();
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Independent copy of the current contents
    fn clone(&self) -> Self {
        let inner = self.inner.read();
        Self {
            inner: RwLock::new(Inner {
                keys: inner.keys.clone(),
                values: inner.values.clone(),
            }),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug + Eq + Hash,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_map()
            .entries(inner.keys.iter().filter_map(|k| inner.values.get(k).map(|v| (k, v))))
            .finish()
    }
}
