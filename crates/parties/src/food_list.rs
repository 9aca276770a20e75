use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use potluck_core::{DomainError, DomainResult};

/// Per-party mapping from item name to the guest who pledged to bring it.
///
/// Only [`Party`](crate::Party) mutates a food list, so every recorded
/// contributor is a guest of the owning party. Entries are kept ordered by
/// item name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodList {
    items: BTreeMap<String, String>,
}

impl FoodList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Guest who pledged `item`, if anyone did.
    pub fn contributor_of(&self, item: &str) -> Option<&str> {
        self.items.get(item).map(String::as_str)
    }

    /// `(item, contributor)` pairs in item-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(i, g)| (i.as_str(), g.as_str()))
    }

    pub(crate) fn insert(&mut self, item: &str, contributor: &str) -> DomainResult<()> {
        if self.items.contains_key(item) {
            return Err(DomainError::duplicate(item));
        }
        self.items.insert(item.to_string(), contributor.to_string());
        Ok(())
    }

    pub(crate) fn remove(&mut self, item: &str) -> DomainResult<String> {
        self.items
            .remove(item)
            .ok_or_else(|| DomainError::item_not_found(item))
    }
}
