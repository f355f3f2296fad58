//! Contract name to encoded selector blob, in insertion order.

use alloy_primitives::Selector;
use indexmap::IndexMap;

use crate::encoder::encode;

/// Encoded selectors of every contract that made it into the library.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorRegistry {
    entries: IndexMap<String, String>,
}

impl SelectorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes and registers the selectors of `name`.
    ///
    /// Contracts without selectors are not registered; returns whether an
    /// entry was written. Registering a name again replaces its blob but keeps
    /// its position.
    pub fn insert(&mut self, name: impl Into<String>, selectors: &[Selector]) -> bool {
        if selectors.is_empty() {
            return false;
        }
        self.entries.insert(name.into(), encode(selectors));
        true
    }

    /// The encoded blob registered for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered contracts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no contract is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered `(name, blob)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, blob)| (name.as_str(), blob.as_str()))
    }
}
