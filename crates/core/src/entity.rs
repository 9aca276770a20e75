//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// A party keeps its number while its food list changes; two parties with the
/// same guests are still different parties.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
