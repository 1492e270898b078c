//! Thread-safe growable sequence

use parking_lot::RwLock;
use std::fmt;

/// A vector shared between threads.
///
/// ```
/// use safe_toolkit::Slice;
///
/// let slice = Slice::new();
/// slice.append(1);
/// slice.append(2);
/// slice.append(3);
///
/// assert!(slice.remove(1));
/// assert_eq!(slice.get(1), Some(3));
/// assert_eq!(slice.get(5), None);
/// assert!(!slice.remove(5));
/// ```
pub struct Slice<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Clone> Slice<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn append(&self, item: T) {
        self.items.write().push(item);
    }

    /// Remove the element at `index`, shifting later elements down.
    /// Returns `false` without changes when `index` is out of range.
    pub fn remove(&self, index: usize) -> bool {
        let mut items = self.items.write();
        if index >= items.len() {
            return false;
        }
        items.remove(index);
        true
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.items.read().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Copy of the current contents
    pub fn items(&self) -> Vec<T> {
        self.items.read().clone()
    }
}

impl<T: Clone> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self {
            items: RwLock::new(self.items()),
        }
    }
}

impl<T: Clone> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl<T: Clone> From<Vec<T>> for Slice<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.read().iter()).finish()
    }
}
