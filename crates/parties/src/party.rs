use serde::Serialize;

use potluck_core::{DomainError, DomainResult, Entity, PartyNumber};

use crate::food_list::FoodList;

/// A party: a number, a fixed guest list and the food guests pledged to bring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    id: PartyNumber,
    guests: Vec<String>,
    #[serde(rename = "foodlist")]
    food_list: FoodList,
}

impl Party {
    /// Create a party with an empty food list.
    ///
    /// Repeated guest names keep their first position. Fails with
    /// [`DomainError::NoGuests`] when no guest is given.
    pub fn new<I, S>(id: PartyNumber, guests: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for guest in guests {
            let guest = guest.into();
            if !unique.contains(&guest) {
                unique.push(guest);
            }
        }

        if unique.is_empty() {
            return Err(DomainError::NoGuests);
        }

        Ok(Self {
            id,
            guests: unique,
            food_list: FoodList::new(),
        })
    }

    pub fn guests(&self) -> &[String] {
        &self.guests
    }

    pub fn food_list(&self) -> &FoodList {
        &self.food_list
    }

    pub fn is_invited(&self, guest: &str) -> bool {
        self.guests.iter().any(|g| g == guest)
    }

    /// Record that `contributor` brings `item`.
    ///
    /// The contributor must be invited and the item must not be on the list
    /// yet, in that order of checking.
    pub fn add_item(&mut self, item: &str, contributor: &str) -> DomainResult<&FoodList> {
        if !self.is_invited(contributor) {
            return Err(DomainError::not_invited(contributor));
        }
        self.food_list.insert(item, contributor)?;
        Ok(&self.food_list)
    }

    /// Take `item` off the food list.
    ///
    /// `contributor` is not compared with whoever added the item: any caller
    /// may remove any existing item.
    pub fn remove_item(&mut self, item: &str, _contributor: &str) -> DomainResult<()> {
        self.food_list.remove(item).map(|_| ())
    }
}

impl Entity for Party {
    type Id = PartyNumber;

    fn id(&self) -> PartyNumber {
        self.id
    }
}
