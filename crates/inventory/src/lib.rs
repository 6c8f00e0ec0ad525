//! Inventory store.
//!
//! An owned mapping from item name to quantity with add/remove/query
//! operations, JSON persistence and plain-text reports. Mutations are
//! fault-tolerant (they report an outcome and log); persistence fails fast.

pub mod activity;
pub mod input;
pub mod persistence;
pub mod report;
pub mod store;

pub use activity::LogEntry;
pub use persistence::DEFAULT_INVENTORY_FILE;
pub use report::{print_data, write_report};
pub use store::{
    AddOutcome, DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, Rejection, RemoveOutcome,
};
