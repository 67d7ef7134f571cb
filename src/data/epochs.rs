//! # Epoch Table
//!
//! Per-epoch selection coefficients, in the order the epochs appear in the
//! log. Serializes as a JSON object keyed by epoch label.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from epoch label to selection coefficient
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpochTable {
    /// (label, coefficient) pairs in first-seen order
    entries: Vec<(String, f64)>,
    /// Map from label to position in `entries`
    label_to_idx: HashMap<String, usize>,
}

impl EpochTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a coefficient for `label`
    ///
    /// A label seen before keeps its original position and takes the new value.
    pub fn insert(&mut self, label: impl Into<String>, coefficient: f64) {
        let label = label.into();
        match self.label_to_idx.get(&label) {
            Some(&idx) => self.entries[idx].1 = coefficient,
            None => {
                self.label_to_idx.insert(label.clone(), self.entries.len());
                self.entries.push((label, coefficient));
            }
        }
    }

    /// Coefficient recorded for `label`, if any
    pub fn get(&self, label: &str) -> Option<f64> {
        self.label_to_idx.get(label).map(|&idx| self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(label, coefficient)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(label, s)| (label.as_str(), *s))
    }
}

impl Serialize for EpochTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, s) in &self.entries {
            map.serialize_entry(label, s)?;
        }
        map.end()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for EpochTable {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (label, s) in iter {
            table.insert(label, s);
        }
        table
    }
}
