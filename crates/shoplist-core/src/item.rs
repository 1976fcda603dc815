//! Core item types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a list item.
///
/// Assigned from a per-list counter starting at 1 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

#[cfg(feature = "native")]
uniffi::custom_newtype!(ItemId, u64);

impl ItemId {
    /// The first id a fresh list hands out.
    pub const FIRST: ItemId = ItemId(1);

    /// The id issued after this one, `None` once the counter is spent.
    pub fn next(&self) -> Option<ItemId> {
        self.0.checked_add(1).map(ItemId)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId(value)
    }
}

/// One shopping-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Item {
    pub id: ItemId,
    /// Trimmed, non-empty
    pub name: String,
    /// Positive and finite
    pub quantity: f64,
    /// Trimmed, non-empty
    pub unit: String,
    #[serde(default)]
    pub purchased: bool,
}

impl Item {
    /// Create an unpurchased item.
    pub fn new(id: ItemId, name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            unit: unit.into(),
            purchased: false,
        }
    }

    /// Whether `name` refers to this item, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Display line: `"<name> <quantity> <unit>"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.quantity, self.unit)
    }
}
