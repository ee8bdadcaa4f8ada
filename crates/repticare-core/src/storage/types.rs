//! Core data types for the storage layer.
//!
//! Field names match the stored encoding exactly (`reptileId`, `type`, ...),
//! so data written by earlier versions of the app loads unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RepticareError;

/// Opaque reptile identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReptileId(String);

/// Opaque entry identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

macro_rules! opaque_id {
    ($name:ident) => {
        impl $name {
            /// Generate a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(ReptileId);
opaque_id!(EntryId);

/// Kind of husbandry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Feeding,
    Toilet,
    Bath,
    Vet,
}

impl EntryType {
    /// All entry types in canonical order.
    pub const ALL: [EntryType; 4] = [
        EntryType::Feeding,
        EntryType::Toilet,
        EntryType::Bath,
        EntryType::Vet,
    ];

    /// Stable tag used in the stored encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Feeding => "feeding",
            EntryType::Toilet => "toilet",
            EntryType::Bath => "bath",
            EntryType::Vet => "vet",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            EntryType::Feeding => 0,
            EntryType::Toilet => 1,
            EntryType::Bath => 2,
            EntryType::Vet => 3,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = RepticareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        EntryType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                RepticareError::Validation(format!(
                    "Unknown entry type \"{}\" (expected one of: feeding, toilet, bath, vet)",
                    s
                ))
            })
    }
}

/// A tracked animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reptile {
    pub id: ReptileId,
    pub name: String,
}

/// A single timestamped husbandry event tied to one reptile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,

    /// Owning reptile
    pub reptile_id: ReptileId,

    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Creation time, never changed afterwards
    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
