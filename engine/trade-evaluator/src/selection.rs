use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of asset labels chosen for one side of a trade
///
/// A Selection only stores labels. Membership in the catalog is checked by
/// the evaluator before anything is inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    labels: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Returns true if the label was not already present
    pub(crate) fn insert(&mut self, label: &str) -> bool {
        if self.labels.contains(label) {
            return false;
        }
        self.labels.insert(label.to_string())
    }

    /// Returns true if the label was present
    pub(crate) fn remove(&mut self, label: &str) -> bool {
        self.labels.remove(label)
    }

    pub(crate) fn clear(&mut self) {
        self.labels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut selection = Selection::new();
        assert!(selection.insert("X"));
        assert!(!selection.insert("X"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut selection = Selection::new();
        assert!(!selection.remove("X"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.insert("X");
        selection.insert("Y");
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.contains("X"));
    }
}
