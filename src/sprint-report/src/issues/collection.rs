//! Ordered, key-unique issue collection.

use super::IssueRecord;
use std::collections::HashMap;

/// Issues keyed by issue key, iterated in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCollection {
    records: Vec<IssueRecord>,
    index: HashMap<String, usize>,
}

impl IssueCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning true if the key was new.
    ///
    /// A record whose key is already present replaces the stored one but keeps
    /// its original position.
    pub fn insert(&mut self, record: IssueRecord) -> bool {
        if let Some(&position) = self.index.get(&record.key) {
            self.records[position] = record;
            return false;
        }

        self.index.insert(record.key.clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// Looks up a record by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&IssueRecord> {
        self.index.get(key).map(|&position| &self.records[position])
    }

    /// Number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no issues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, IssueRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a IssueCollection {
    type Item = &'a IssueRecord;
    type IntoIter = std::slice::Iter<'a, IssueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<IssueRecord> for IssueCollection {
    fn from_iter<I: IntoIterator<Item = IssueRecord>>(iter: I) -> Self {
        let mut collection = Self::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}
