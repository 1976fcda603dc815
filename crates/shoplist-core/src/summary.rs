//! Aggregate progress over a list.

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the summary line shows for the current items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum Summary {
    /// No items, no summary text
    Empty,
    /// Every item is purchased
    AllPurchased,
    /// Count of items still to buy
    Remaining(u64),
}

impl Summary {
    /// Summarize a slice of items.
    pub fn of(items: &[Item]) -> Self {
        if items.is_empty() {
            return Summary::Empty;
        }
        let remaining = items.iter().filter(|item| !item.purchased).count() as u64;
        if remaining == 0 {
            Summary::AllPurchased
        } else {
            Summary::Remaining(remaining)
        }
    }

    /// Text to show, `None` for an empty list.
    pub fn message(&self) -> Option<String> {
        match self {
            Summary::Empty => None,
            Summary::AllPurchased => Some("all items purchased.".to_string()),
            Summary::Remaining(n) => Some(format!("{n} items remaining.")),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(&message),
            None => Ok(()),
        }
    }
}

/// Summarize items for FFI callers.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn summarize(items: Vec<Item>) -> Summary {
    Summary::of(&items)
}

/// Purchased count against total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub purchased: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(items: &[Item]) -> Self {
        Self {
            purchased: items.iter().filter(|item| item.purchased).count(),
            total: items.len(),
        }
    }

    /// Fraction purchased (0.0 to 1.0); 0.0 for an empty list.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.purchased as f64 / self.total as f64
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.purchased
    }
}
