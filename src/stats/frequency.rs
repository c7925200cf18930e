use indexmap::IndexMap;
use serde::Serialize;

/// Type name to tile count. Only names with at least one tile are present.
///
/// Iteration follows insertion order, which the aggregator makes ascending
/// by type id, so two tables built from the same world compare and print
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }

    /// Entries by descending count; ties keep table order.
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Two ids may share a display name; their counts merge.
    pub(crate) fn add(&mut self, name: &str, count: u64) {
        if count == 0 {
            return;
        }
        match self.counts.get_mut(name) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(name.to_string(), count);
            }
        }
    }
}
