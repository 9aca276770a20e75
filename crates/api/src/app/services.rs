use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use potluck_core::{DomainResult, PartyNumber};
use potluck_parties::{FoodList, Party, PartyRegistry};

/// Shared state behind every route: the party registry.
///
/// One lock guards the whole registry. Writers hold it for the entire
/// check-then-mutate sequence, and nothing holds it across an `.await`.
#[derive(Debug, Default)]
pub struct AppServices {
    registry: RwLock<PartyRegistry>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    // Every operation validates before mutating, so a poisoned registry is
    // still consistent.
    fn read(&self) -> RwLockReadGuard<'_, PartyRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PartyRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_party(&self, guests: Vec<String>) -> DomainResult<PartyNumber> {
        let guest_count = guests.len();
        let id = self.write().create(guests)?;
        tracing::info!(party = %id, guest_count, "party created");
        Ok(id)
    }

    pub fn list_parties(&self) -> Vec<Party> {
        self.read().loaded().cloned().collect()
    }

    pub fn loaded_count(&self) -> usize {
        self.read().loaded_count()
    }

    pub fn get_party(&self, id: PartyNumber) -> DomainResult<Party> {
        self.read().get(id).cloned()
    }

    pub fn delete_party(&self, id: PartyNumber) -> DomainResult<()> {
        self.write().remove(id)?;
        tracing::info!(party = %id, "party deleted");
        Ok(())
    }

    pub fn food_list(&self, id: PartyNumber) -> DomainResult<FoodList> {
        Ok(self.read().get(id)?.food_list().clone())
    }

    pub fn add_food(&self, id: PartyNumber, user: &str, item: &str) -> DomainResult<FoodList> {
        let list = self.write().get_mut(id)?.add_item(item, user)?.clone();
        tracing::debug!(party = %id, user, item, "food item added");
        Ok(list)
    }

    pub fn remove_food(&self, id: PartyNumber, user: &str, item: &str) -> DomainResult<()> {
        self.write().get_mut(id)?.remove_item(item, user)?;
        tracing::debug!(party = %id, user, item, "food item removed");
        Ok(())
    }
}
