use std::collections::HashMap;

/// A named string-keyed store that keeps a running write counter.
///
/// `count` is bumped on every [`add`](Self::add), overwrites included, and
/// dropped on every successful [`remove`](Self::remove). It therefore counts
/// net writes rather than keys; use [`len`](Self::len) for the key count.
#[derive(Clone, Debug)]
pub struct PathDictionary<V> {
    name: String,
    entries: HashMap<String, V>,
    count: usize,
}

impl<V> PathDictionary<V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
            count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts or overwrites `key`. Always increments the write counter.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), value);
        self.count += 1;
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Deletes `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.count -= 1;
            true
        } else {
            false
        }
    }

    /// Net number of writes (adds minus removals).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
