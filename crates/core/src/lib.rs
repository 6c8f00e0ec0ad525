//! `stocktrack-core` — inventory vocabulary shared by every crate.
//!
//! Item names, quantities and the error model. No IO happens here.

pub mod error;
pub mod item;

pub use error::{InventoryError, InventoryResult};
pub use item::{ItemName, Quantity};
