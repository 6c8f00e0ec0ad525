//! Item identifiers and quantities.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Integer count of units held for an item. May be negative; the store does
/// not enforce a sign.
pub type Quantity = i64;

/// Name of a stock-keeping unit.
///
/// Ordered by name so stores iterate deterministically. Serialized as a plain
/// string; deserializing an empty string fails.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Build a name, returning `None` for the empty string.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemName {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for ItemName {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InventoryError::invalid_item("item name cannot be empty"))
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(ItemName::new("").is_none());
        assert!(matches!(
            "".parse::<ItemName>(),
            Err(InventoryError::InvalidItem(_))
        ));
    }

    #[test]
    fn whitespace_is_a_valid_name() {
        // Only the empty string is falsy; anything else names an item.
        assert_eq!(ItemName::new(" ").map(|n| n.into_inner()), Some(" ".to_string()));
    }

    #[test]
    fn serializes_as_plain_string() {
        let name: ItemName = "apple".parse().unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"apple\"");
    }

    #[test]
    fn deserializing_empty_name_fails() {
        assert!(serde_json::from_str::<ItemName>("\"\"").is_err());
        assert_eq!(
            serde_json::from_str::<ItemName>("\"pear\"").unwrap().as_str(),
            "pear"
        );
    }

    proptest! {
        #[test]
        fn non_empty_names_display_unchanged(name in ".{1,32}") {
            let parsed: ItemName = name.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), name);
        }
    }
}
