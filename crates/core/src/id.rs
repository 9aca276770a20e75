//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Sequential party identifier.
///
/// Issued in order starting at 0. Rendered as a plain number in JSON and as a
/// decimal string in URLs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyNumber(u64);

impl PartyNumber {
    /// The first identifier ever issued.
    pub const FIRST: PartyNumber = PartyNumber(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The identifier issued right after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for PartyNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for PartyNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PartyNumber> for u64 {
    fn from(value: PartyNumber) -> Self {
        value.0
    }
}

impl FromStr for PartyNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("PartyNumber: {e}")))?;
        Ok(Self(value))
    }
}
