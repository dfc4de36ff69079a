use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value as JsonValue;

use stockkeep_core::{DomainError, DomainResult};

use crate::item::{ItemName, UntypedAdd};
use crate::log::{StockLog, StockLogEntry};

/// Threshold used by [`Inventory::list_low_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// In-memory mapping from item name to quantity.
///
/// Owned by the caller; nothing here is process-global, so independent
/// inventories can coexist (and tests stay isolated).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub(crate) items: HashMap<ItemName, i64>,
}

/// What [`Inventory::remove`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The item was not stocked; nothing changed.
    Missing,
    /// Quantity decreased and is still positive.
    Reduced { remaining: i64 },
    /// Quantity reached zero or below and the item was deleted.
    Depleted,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// All items with their quantities, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> + '_ {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Add `qty` to `item`, creating it at zero first if needed.
    ///
    /// An empty item name is a silent no-op (`Ok(None)`). Negative quantities
    /// are accepted as-is and can leave an entry below zero.
    pub fn add(&mut self, item: &str, qty: i64) -> DomainResult<Option<StockLogEntry>> {
        if item.is_empty() {
            tracing::debug!(qty, "ignoring add with empty item name");
            return Ok(None);
        }
        let name = ItemName::parse(item)?;

        let current = self.items.get(item).copied().unwrap_or(0);
        let next = current.checked_add(qty).ok_or_else(|| {
            DomainError::invariant(format!("quantity overflow adding {qty} to {item}"))
        })?;

        if qty < 0 {
            // Accepted for compatibility with "remove via add" callers.
            tracing::warn!(item, qty, "negative quantity passed to add");
        }

        self.items.insert(name.clone(), next);
        tracing::debug!(item, qty, quantity = next, "stock added");

        Ok(Some(StockLogEntry {
            at: Utc::now(),
            item: name,
            qty,
        }))
    }

    /// [`Inventory::add`], appending the log entry to `log` on success.
    pub fn add_logged(&mut self, item: &str, qty: i64, log: &mut StockLog) -> DomainResult<()> {
        if let Some(entry) = self.add(item, qty)? {
            log.push(entry);
        }
        Ok(())
    }

    /// Add from dynamically-typed input.
    ///
    /// The item must be a JSON string and the quantity a JSON integer that
    /// fits in `i64`; anything else is rejected without touching the inventory.
    pub fn add_untyped(
        &mut self,
        item: &JsonValue,
        qty: &JsonValue,
    ) -> DomainResult<Option<StockLogEntry>> {
        match UntypedAdd::parse(item, qty) {
            Ok(UntypedAdd::Empty) => {
                tracing::debug!("ignoring untyped add with empty item name");
                Ok(None)
            }
            Ok(UntypedAdd::Entry { item, qty }) => self.add(&item, qty),
            Err(err) => {
                tracing::warn!(%item, %qty, error = %err, "rejected untyped add");
                Err(err)
            }
        }
    }

    /// Subtract `qty` from `item`, deleting it once it reaches zero or below.
    ///
    /// Removing an item that is not stocked is a deliberate no-op and returns
    /// [`RemoveOutcome::Missing`] rather than an error.
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<RemoveOutcome> {
        let Some(current) = self.items.get(item).copied() else {
            tracing::debug!(item, qty, "remove of unstocked item ignored");
            return Ok(RemoveOutcome::Missing);
        };

        let remaining = current.checked_sub(qty).ok_or_else(|| {
            DomainError::invariant(format!("quantity overflow removing {qty} from {item}"))
        })?;

        if remaining <= 0 {
            self.items.remove(item);
            tracing::debug!(item, qty, "stock depleted; item removed");
            return Ok(RemoveOutcome::Depleted);
        }

        if let Some(slot) = self.items.get_mut(item) {
            *slot = remaining;
        }
        tracing::debug!(item, qty, quantity = remaining, "stock removed");
        Ok(RemoveOutcome::Reduced { remaining })
    }

    /// Current quantity of `item`.
    pub fn get_quantity(&self, item: &str) -> DomainResult<i64> {
        self.items
            .get(item)
            .copied()
            .ok_or_else(|| DomainError::not_found(item))
    }

    /// Items whose quantity is strictly below `threshold`, in unspecified order.
    pub fn list_low(&self, threshold: i64) -> Vec<&ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn list_low_default(&self) -> Vec<&ItemName> {
        self.list_low(DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

impl FromIterator<(ItemName, i64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (ItemName, i64)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
