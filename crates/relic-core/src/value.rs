use crate::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

///
/// Value
///
/// The scalar universe the engine operates on. Deliberately flat: there is no
/// collection or nested-object variant, which is what enforces the
/// flat-entity contract at the type level. Navigation state is handled by the
/// reconciliation engine, never by merge or filtering.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
    Timestamp(Timestamp),
    Ref(RecordId),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(ValueKind::Bool),
            Self::Int(_) => Some(ValueKind::Int),
            Self::Uint(_) => Some(ValueKind::Uint),
            Self::Text(_) => Some(ValueKind::Text),
            Self::Timestamp(_) => Some(ValueKind::Timestamp),
            Self::Ref(_) => Some(ValueKind::Ref),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this is the zero value of its kind.
    ///
    /// Zero values are what a partial-update payload cannot distinguish from
    /// an omitted field, so the legacy merge path skips them.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(value) => !value,
            Self::Int(value) => *value == 0,
            Self::Uint(value) => *value == 0,
            Self::Text(value) => value.is_empty(),
            Self::Timestamp(value) => value.is_epoch(),
            Self::Ref(value) => value.is_nil(),
        }
    }

    /// Case-insensitive substring containment; `false` for non-text values.
    #[must_use]
    pub fn contains_ci(&self, needle: &str) -> bool {
        match self {
            Self::Text(haystack) => haystack.to_lowercase().contains(&needle.to_lowercase()),
            _ => false,
        }
    }

    /// Total order used by the comparator. Same-kind values compare
    /// naturally (text casefolded); mixed kinds fall back to a fixed kind
    /// rank so sorting stays total and deterministic.
    #[must_use]
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Uint(a), Self::Uint(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
            }
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::Ref(a), Self::Ref(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    // Null sorts before every concrete value.
    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Uint(_) => 3,
            Self::Text(_) => 4,
            Self::Timestamp(_) => 5,
            Self::Ref(_) => 6,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<RecordId> for Value {
    fn from(value: RecordId) -> Self {
        Self::Ref(value)
    }
}

///
/// ValueKind
///
/// The declared type of a descriptor field; used by patch and filter
/// validation before any value is applied.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ValueKind {
    Bool,
    Int,
    Uint,
    Text,
    Timestamp,
    Ref,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Ref => "ref",
        };

        write!(f, "{name}")
    }
}
