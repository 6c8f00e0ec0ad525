//! Human-readable record of successful additions.

use chrono::{DateTime, Local};

use stocktrack_core::{ItemName, Quantity};

/// One successful `add_item`, rendered as `"<timestamp>: Added <qty> of <item>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub item: ItemName,
    pub quantity: Quantity,
}

impl LogEntry {
    pub fn added(item: ItemName, quantity: Quantity) -> Self {
        Self {
            at: Local::now(),
            item,
            quantity,
        }
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.quantity,
            self.item
        )
    }
}
