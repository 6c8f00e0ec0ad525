//! The inventory store and its mutation outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use stocktrack_core::{ItemName, Quantity};

use crate::activity::LogEntry;
use crate::input;

/// Threshold used by reports when the caller does not pick one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Why an add left the store untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Item name was empty (or not a string at all).
    EmptyItem,
    /// Quantity was not an integer.
    NonIntegerQuantity,
    /// The new quantity would not fit in a `Quantity`.
    Overflow,
}

/// Result of [`InventoryStore::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item now holds `quantity` units.
    Added { item: ItemName, quantity: Quantity },
    Ignored(Rejection),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// Result of [`InventoryStore::remove_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The item is still stocked with `remaining` units.
    Decremented { remaining: Quantity },
    /// The quantity dropped to zero or below and the item was deleted.
    Removed,
    /// No such item; nothing changed.
    NotFound,
    /// The removal could not be applied; nothing changed.
    Failed(String),
}

/// Mapping from item name to quantity.
///
/// Serializes as a flat JSON object (`{"apple": 7}`). Iteration follows item
/// name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryStore {
    items: BTreeMap<ItemName, Quantity>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `item`, creating the entry if needed.
    ///
    /// An empty `item` is ignored without logging. Negative quantities are
    /// accepted and decrement the stored value; the result may go negative.
    /// On success an entry is appended to `log` when one is supplied.
    pub fn add_item(
        &mut self,
        item: &str,
        quantity: Quantity,
        log: Option<&mut Vec<LogEntry>>,
    ) -> AddOutcome {
        let Some(item) = ItemName::new(item) else {
            return AddOutcome::Ignored(Rejection::EmptyItem);
        };
        self.add_named(item, quantity, log)
    }

    /// Same as [`add_item`](Self::add_item) for loosely-typed callers.
    ///
    /// A non-integer `quantity` is refused with a warning before the item is
    /// looked at. A missing, empty or non-string `item` is ignored silently.
    pub fn add_value(
        &mut self,
        item: &Value,
        quantity: &Value,
        log: Option<&mut Vec<LogEntry>>,
    ) -> AddOutcome {
        let Some(quantity) = input::quantity_from_value(quantity) else {
            tracing::warn!(%quantity, "attempted to add non-integer quantity");
            return AddOutcome::Ignored(Rejection::NonIntegerQuantity);
        };
        let Some(item) = input::item_from_value(item) else {
            return AddOutcome::Ignored(Rejection::EmptyItem);
        };
        self.add_named(item, quantity, log)
    }

    fn add_named(
        &mut self,
        item: ItemName,
        quantity: Quantity,
        log: Option<&mut Vec<LogEntry>>,
    ) -> AddOutcome {
        let current = self.quantity(item.as_str());
        let Some(updated) = current.checked_add(quantity) else {
            tracing::warn!(%item, current, quantity, "quantity overflow; add ignored");
            return AddOutcome::Ignored(Rejection::Overflow);
        };

        self.items.insert(item.clone(), updated);
        tracing::debug!(%item, quantity, total = updated, "item added");

        if let Some(log) = log {
            log.push(LogEntry::added(item.clone(), quantity));
        }

        AddOutcome::Added {
            item,
            quantity: updated,
        }
    }

    /// Take `quantity` units of `item` out of stock.
    ///
    /// The item is deleted once its quantity reaches zero or below. A missing
    /// item is logged at info level and left alone. Any other failure is
    /// logged as an error; the store is never left half-updated.
    pub fn remove_item(&mut self, item: &str, quantity: Quantity) -> RemoveOutcome {
        let Some(current) = self.items.get_mut(item) else {
            tracing::info!(item, "attempted to remove non-existent item");
            return RemoveOutcome::NotFound;
        };

        let Some(remaining) = current.checked_sub(quantity) else {
            let reason = format!("removing {quantity} from {current} overflows");
            tracing::error!(item, %reason, "unexpected error while removing item");
            return RemoveOutcome::Failed(reason);
        };

        if remaining <= 0 {
            self.items.remove(item);
            tracing::debug!(item, "item removed");
            RemoveOutcome::Removed
        } else {
            *current = remaining;
            tracing::debug!(item, remaining, "item decremented");
            RemoveOutcome::Decremented { remaining }
        }
    }

    /// Stored quantity for `item`, or 0 when absent.
    pub fn quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn low_items(&self, threshold: Quantity) -> Vec<ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.items.iter().map(|(item, qty)| (item, *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Swap in a whole new mapping (used by loads).
    pub(crate) fn replace(&mut self, other: InventoryStore) {
        self.items = other.items;
    }
}

impl FromIterator<(ItemName, Quantity)> for InventoryStore {
    fn from_iter<T: IntoIterator<Item = (ItemName, Quantity)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
