//! Thread-safe sequence without duplicates

use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

struct Inner<T> {
    items: Vec<T>,
    /// Same contents as `items`, for O(1) membership checks
    present: HashSet<T>,
}

/// An insertion-ordered sequence that ignores values it already holds.
///
/// ```
/// use safe_toolkit::UniqueSlice;
///
/// let slice = UniqueSlice::new();
/// assert!(slice.append("a"));
/// assert!(!slice.append("a"));
/// assert_eq!(slice.items(), vec!["a"]);
/// ```
pub struct UniqueSlice<T> {
    inner: RwLock<Inner<T>>,
}

impl<T> UniqueSlice<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: Vec::new(),
                present: HashSet::new(),
            }),
        }
    }

    /// Append `item` unless an equal value is present.
    /// Returns whether the item was added.
    pub fn append(&self, item: T) -> bool {
        let mut inner = self.inner.write();
        if inner.present.contains(&item) {
            return false;
        }
        inner.present.insert(item.clone());
        inner.items.push(item);
        true
    }

    /// Remove the element at `index`, shifting later elements down and
    /// forgetting the value. Returns `false` when `index` is out of range.
    pub fn remove(&self, index: usize) -> bool {
        let mut inner = self.inner.write();
        if index >= inner.items.len() {
            return false;
        }
        let removed = inner.items.remove(index);
        inner.present.remove(&removed);
        true
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.read().items.get(index).cloned()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.inner.read().present.contains(item)
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }

    /// Copy of the current contents
    pub fn items(&self) -> Vec<T> {
        self.inner.read().items.clone()
    }
}

impl<T> Default for UniqueSlice<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for UniqueSlice<T>
where
    T: Eq + Hash + Clone,
{
    fn clone(&self) -> Self {
        let inner = self.inner.read();
        Self {
            inner: RwLock::new(Inner {
                items: inner.items.clone(),
                present: inner.present.clone(),
            }),
        }
    }
}

impl<T> FromIterator<T> for UniqueSlice<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let slice = Self::new();
        for item in iter {
            slice.append(item);
        }
        slice
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.read().items.iter()).finish()
    }
}
