//! Person identifiers.
//!
//! A [`PersonId`] is the display name a group member is recorded under.
//! Identifiers are trimmed on entry and compared exactly; their lexical
//! order is the tie-break order used by the settlement minimizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CashflowError, Result, constants};

/// Identifier of a person participating in the ledger.
///
/// Always trimmed, non-empty, at most [`constants::MAX_PERSON_ID_LEN`]
/// characters, and free of control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Parse and normalize a raw identifier.
    ///
    /// # Errors
    /// Returns [`CashflowError::InvalidPersonId`] if the trimmed input is
    /// empty, too long, or contains control characters.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CashflowError::InvalidPersonId {
                reason: "Names cannot be empty".to_string(),
            });
        }
        let len = trimmed.chars().count();
        if len > constants::MAX_PERSON_ID_LEN {
            return Err(CashflowError::InvalidPersonId {
                reason: format!(
                    "Name is {len} characters, maximum is {}",
                    constants::MAX_PERSON_ID_LEN
                ),
            });
        }
        if trimmed.chars().any(char::is_control) {
            return Err(CashflowError::InvalidPersonId {
                reason: "Name contains control characters".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, used to reject self-payments such as
    /// `alice` → `Alice`.
    #[must_use]
    pub fn same_person(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonId {
    type Error = CashflowError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
