use std::collections::HashSet;

/// In-memory record of visited/applied companies, in the order they were marked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisitedSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// Returns `true` when the key was not present before.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.index.contains(&key) {
            return false;
        }
        self.index.insert(key.clone());
        self.order.push(key);
        true
    }

    /// Returns `true` when the key was present before.
    pub fn remove(&mut self, key: &str) -> bool {
        if !self.index.remove(key) {
            return false;
        }
        self.order.retain(|existing| existing != key);
        true
    }

    /// Marks or unmarks `key`; returns whether the set changed.
    pub fn set(&mut self, key: impl Into<String>, visited: bool) -> bool {
        let key = key.into();
        if visited {
            self.insert(key)
        } else {
            self.remove(&key)
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for VisitedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}
