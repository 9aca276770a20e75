//! Parties domain module: parties, their guest lists and food lists.
//!
//! This crate contains the business rules as deterministic domain logic
//! (no IO, no HTTP, no locking). Callers own a [`PartyRegistry`] and decide
//! how to share it.

pub mod food_list;
pub mod party;
pub mod registry;

pub use food_list::FoodList;
pub use party::Party;
pub use registry::PartyRegistry;
