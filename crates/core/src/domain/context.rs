// Scoped Context
// Owned key/value store passed explicitly instead of a process-wide namespace

use std::collections::BTreeMap;

/// Slot name for the custom variable
pub const CUSTOM_VAR_KEY: &str = "my_custom_var";

/// Value stored under `CUSTOM_VAR_KEY`
pub const CUSTOM_VAR_VALUE: &str = "Hello, global!";

/// Key/value context owned by the caller and borrowed by use cases
///
/// Iteration order is the key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopedContext {
    values: BTreeMap<String, String>,
}

impl ScopedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
