use std::collections::BTreeMap;

use potluck_core::{DomainError, DomainResult, Entity, PartyNumber};

use crate::party::Party;

/// All parties created so far, keyed by number, plus the issued-number counter.
///
/// Numbers are never reused: deleting a party leaves a hole that later
/// lookups report as [`DomainError::PartyGone`].
#[derive(Debug, Clone, Default)]
pub struct PartyRegistry {
    parties: BTreeMap<PartyNumber, Party>,
    next: PartyNumber,
}

impl PartyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new party and return its number.
    ///
    /// The counter only advances when the party is valid.
    pub fn create<I, S>(&mut self, guests: I) -> DomainResult<PartyNumber>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = self.next;
        let party = Party::new(id, guests)?;
        self.parties.insert(id, party);
        self.next = id.next();
        Ok(id)
    }

    /// How many numbers have ever been issued.
    pub fn issued(&self) -> u64 {
        self.next.value()
    }

    /// Parties still present, in ascending number order.
    pub fn loaded(&self) -> impl Iterator<Item = &Party> {
        self.parties.values()
    }

    pub fn loaded_count(&self) -> usize {
        self.parties.len()
    }

    /// Existence policy shared by every number-addressed operation.
    pub fn check(&self, id: PartyNumber) -> DomainResult<()> {
        if id >= self.next {
            Err(DomainError::PartyNotFound(id))
        } else if !self.parties.contains_key(&id) {
            Err(DomainError::PartyGone(id))
        } else {
            Ok(())
        }
    }

    pub fn get(&self, id: PartyNumber) -> DomainResult<&Party> {
        self.check(id)?;
        self.parties.get(&id).ok_or(DomainError::PartyGone(id))
    }

    pub fn get_mut(&mut self, id: PartyNumber) -> DomainResult<&mut Party> {
        self.check(id)?;
        self.parties.get_mut(&id).ok_or(DomainError::PartyGone(id))
    }

    /// Delete a party. Its number stays issued.
    pub fn remove(&mut self, id: PartyNumber) -> DomainResult<Party> {
        self.check(id)?;
        let party = self
            .parties
            .remove(&id)
            .ok_or(DomainError::PartyGone(id))?;
        debug_assert_eq!(party.id(), id);
        Ok(party)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn numbers_start_at_zero_and_increase() {
        let mut registry = PartyRegistry::new();
        assert_eq!(registry.create(["a", "b"]).unwrap(), PartyNumber::new(0));
        assert_eq!(registry.create(["c"]).unwrap(), PartyNumber::new(1));
        assert_eq!(registry.issued(), 2);
        assert_eq!(registry.loaded_count(), 2);
    }

    #[test]
    fn failed_creation_does_not_consume_a_number() {
        let mut registry = PartyRegistry::new();
        let err = registry.create(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, DomainError::NoGuests);
        assert_eq!(registry.issued(), 0);

        assert_eq!(registry.create(["a"]).unwrap(), PartyNumber::FIRST);
    }

    #[test]
    fn deleted_numbers_are_gone_and_never_reused() {
        let mut registry = PartyRegistry::new();
        let first = registry.create(["a", "b"]).unwrap();
        registry.remove(first).unwrap();

        assert_eq!(registry.get(first).unwrap_err(), DomainError::PartyGone(first));
        assert_eq!(registry.remove(first).unwrap_err(), DomainError::PartyGone(first));

        let second = registry.create(["a"]).unwrap();
        assert_eq!(second, PartyNumber::new(1));
        assert_eq!(registry.loaded_count(), 1);
    }

    #[test]
    fn numbers_never_issued_are_not_found() {
        let mut registry = PartyRegistry::new();
        let id = PartyNumber::new(0);
        assert_eq!(registry.check(id).unwrap_err(), DomainError::PartyNotFound(id));

        registry.create(["a"]).unwrap();
        let ahead = PartyNumber::new(1);
        assert_eq!(registry.get(ahead).unwrap_err(), DomainError::PartyNotFound(ahead));
        assert!(registry.get(id).is_ok());
    }

    #[test]
    fn food_list_changes_go_through_get_mut() {
        let mut registry = PartyRegistry::new();
        let id = registry.create(["alice", "bob"]).unwrap();

        registry.get_mut(id).unwrap().add_item("pie", "alice").unwrap();
        assert_eq!(
            registry.get(id).unwrap().food_list().contributor_of("pie"),
            Some("alice")
        );
    }

    #[test]
    fn loaded_lists_live_parties_in_number_order() {
        let mut registry = PartyRegistry::new();
        for guest in ["a", "b", "c"] {
            registry.create([guest]).unwrap();
        }
        registry.remove(PartyNumber::new(1)).unwrap();

        let ids: Vec<u64> = registry.loaded().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(Vec<String>),
        Remove(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            prop::collection::vec("[a-d]", 0..3).prop_map(Op::Create),
            (0u64..8).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn issued_count_is_monotonic_and_outcomes_follow_policy(ops in prop::collection::vec(op(), 0..40)) {
            let mut registry = PartyRegistry::new();
            let mut deleted = Vec::new();

            for op in ops {
                let before = registry.issued();
                match op {
                    Op::Create(guests) => {
                        let empty = guests.is_empty();
                        match registry.create(guests) {
                            Ok(id) => {
                                prop_assert!(!empty);
                                prop_assert_eq!(id.value(), before);
                                prop_assert_eq!(registry.issued(), before + 1);
                            }
                            Err(e) => {
                                prop_assert!(empty);
                                prop_assert_eq!(e, DomainError::NoGuests);
                                prop_assert_eq!(registry.issued(), before);
                            }
                        }
                    }
                    Op::Remove(raw) => {
                        let id = PartyNumber::new(raw);
                        match registry.remove(id) {
                            Ok(_) => deleted.push(raw),
                            Err(DomainError::PartyNotFound(_)) => {
                                prop_assert!(raw >= before);
                            }
                            Err(DomainError::PartyGone(_)) => {
                                prop_assert!(deleted.contains(&raw));
                            }
                            Err(e) => {
                                prop_assert!(false, "unexpected error {:?}", e);
                            }
                        }
                        prop_assert_eq!(registry.issued(), before);
                    }
                }
            }

            for raw in deleted {
                prop_assert_eq!(
                    registry.get(PartyNumber::new(raw)).unwrap_err(),
                    DomainError::PartyGone(PartyNumber::new(raw))
                );
            }
        }
    }
}
