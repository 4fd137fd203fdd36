use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::EventRecord;

/// Event ids this browser has registered for
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RegistrationSet(BTreeSet<i64>);

impl RegistrationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    /// Events without an id can never be registered
    pub fn contains_event(&self, event: &EventRecord) -> bool {
        event.id.is_some_and(|id| self.contains(id))
    }

    /// Returns `false` if the id was already present
    pub fn insert(&mut self, id: i64) -> bool {
        self.0.insert(id)
    }

    /// Returns `false` if the id was not present
    pub fn remove(&mut self, id: i64) -> bool {
        self.0.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<i64> for RegistrationSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
