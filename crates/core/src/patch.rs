//! Tri-state field wrapper for partial updates.
//!
//! A JSON body like `{"due_to": null}` must clear the column, while `{}`
//! must leave it alone. `Option<T>` cannot tell those apart, so update DTOs
//! declare each field as `#[serde(default)] Patch<T>`:
//!
//! - key missing            -> [`Patch::Absent`] (via `Default`)
//! - key present, `null`    -> [`Patch::Null`]
//! - key present, value     -> [`Patch::Value`]

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// `true` when the key appeared in the payload, even as `null`.
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// The new value, if one was supplied. `Null` and `Absent` both yield `None`;
    /// pair with [`Patch::is_present`] to decide whether to write.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// A present key: `Some` becomes `Value`, `None` becomes `Null`.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present; missing keys go through Default.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
