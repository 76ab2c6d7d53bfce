//! Field presence for partial updates.
//!
//! JSON has two ways of "not giving a value": leaving the key out and sending
//! `null`. For nullable columns both mean different things, so [`Patch`]
//! keeps them apart. Non-nullable columns use `Option<T>` together with
//! [`non_null`], which accepts an omitted key but rejects an explicit `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Update instruction for a nullable field.
///
/// Use with `#[serde(default)]` so that an omitted key becomes
/// [`Patch::Absent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Patch<T> {
    /// Key omitted: keep the stored value.
    Absent,
    /// Key present with `null`: clear the stored value.
    Null,
    /// Key present with a value: overwrite the stored value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// `None` when the field must be left alone, `Some(None)` when it must be
    /// cleared and `Some(Some(v))` when it must be overwritten.
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            Patch::Absent => None,
            Patch::Null => Some(None),
            Patch::Value(value) => Some(Some(value)),
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
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Absent | Patch::Null => serializer.serialize_none(),
            Patch::Value(value) => serializer.serialize_some(value),
        }
    }
}

/// Deserializer for optional fields that may be omitted but not `null`.
///
/// Pair it with `#[serde(default)]`.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_update_maps_each_state() {
        assert_eq!(Patch::<i32>::Absent.into_update(), None);
        assert_eq!(Patch::<i32>::Null.into_update(), Some(None));
        assert_eq!(Patch::Value(3).into_update(), Some(Some(3)));
    }
}
