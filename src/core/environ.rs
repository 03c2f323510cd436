//! Ordered environment set.
//!
//! A process environment kept as a flat list of `KEY=VALUE` strings, the
//! shape the eventual exec call consumes. Keys are unique; values are
//! replaced last-write-wins.

/// An ordered collection of `KEY=VALUE` strings.
///
/// Newly set keys append to the end, so the relative order of fresh keys
/// is preserved. [`Environ::unset`] removes by swap-with-last, which may
/// perturb the position of unrelated entries; only key identity matters.
#[derive(Debug, Clone, Default)]
pub struct Environ(Vec<String>);

impl Environ {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the ambient process environment.
    pub fn from_process() -> Self {
        Self(
            std::env::vars()
                .map(|(key, value)| format!("{key}={value}"))
                .collect(),
        )
    }

    /// Whether some entry has the exact prefix `key=`.
    pub fn is_set(&self, key: &str) -> bool {
        self.0.iter().any(|entry| matches_key(entry, key))
    }

    /// Look up the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| matches_key(entry, key))
            .map(|entry| &entry[key.len() + 1..])
    }

    /// Remove the first entry for `key`, if any. No-op when absent.
    pub fn unset(&mut self, key: &str) {
        if let Some(idx) = self.0.iter().position(|entry| matches_key(entry, key)) {
            self.0.swap_remove(idx);
        }
    }

    /// Set `key` to `value`, replacing any existing entry for the key.
    pub fn set(&mut self, key: &str, value: &str) {
        self.unset(key);
        self.0.push(format!("{key}={value}"));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries as (key, value) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        // Every entry is built as key=value, so the split always succeeds.
        self.0.iter().filter_map(|entry| entry.split_once('='))
    }
}

/// Whether `entry` starts with `key` immediately followed by `=`.
fn matches_key(entry: &str, key: &str) -> bool {
    entry
        .strip_prefix(key)
        .is_some_and(|rest| rest.starts_with('='))
}
