//! Domain error model.

use thiserror::Error;

use crate::id::PartyNumber;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a clean, deterministic rejection of a single request:
/// the operation that produced it has not changed any state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A party was requested without any guest.
    #[error("you cannot party alone: at least one guest is required")]
    NoGuests,

    /// The contributor is not on the party's guest list.
    #[error("{guest} is not invited to this party")]
    NotInvitedGuest { guest: String },

    /// The item is already on the food list (first contributor wins).
    #[error("{item} is already on the food list")]
    DuplicateContribution { item: String },

    /// The item is not on the food list.
    #[error("{item} is not on the food list")]
    ItemNotFound { item: String },

    /// No party with this number was ever created.
    #[error("party {0} not found")]
    PartyNotFound(PartyNumber),

    /// The party existed but has been deleted.
    #[error("party {0} is gone")]
    PartyGone(PartyNumber),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn not_invited(guest: impl Into<String>) -> Self {
        Self::NotInvitedGuest { guest: guest.into() }
    }

    pub fn duplicate(item: impl Into<String>) -> Self {
        Self::DuplicateContribution { item: item.into() }
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound { item: item.into() }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Stable machine-readable code, used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoGuests => "no_guests",
            Self::NotInvitedGuest { .. } => "not_invited",
            Self::DuplicateContribution { .. } => "duplicate_item",
            Self::ItemNotFound { .. } => "item_not_found",
            Self::PartyNotFound(_) | Self::InvalidId(_) => "not_found",
            Self::PartyGone(_) => "gone",
        }
    }
}
