//! Fixed sequence of store operations, printed as it goes.

use std::io::Write;

use anyhow::Context;
use serde_json::json;

use stocktrack_inventory::{InventoryStore, write_report};

use crate::config::DemoConfig;

/// Run the demo against a fresh store, writing human output to `out`.
///
/// Mutation mistakes (bad quantity, unknown item) are logged and skipped.
/// Persistence failures end the run with an error.
pub fn run<W: Write>(config: &DemoConfig, mut out: W) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    let mut activity = Vec::new();

    store.add_item("apple", 10, Some(&mut activity));
    store.add_item("banana", -2, Some(&mut activity));
    store.add_value(&json!(123), &json!("ten"), Some(&mut activity));
    store.remove_item("apple", 3);
    store.remove_item("orange", 1);

    for entry in &activity {
        tracing::info!(%entry, "activity");
    }

    writeln!(out, "Apple stock: {}", store.quantity("apple"))?;

    let low = store.low_items(config.low_stock_threshold);
    let low: Vec<&str> = low.iter().map(|item| item.as_str()).collect();
    writeln!(out, "Low items: {low:?}")?;

    let path = &config.inventory_file;
    store
        .save_data(path)
        .with_context(|| format!("saving inventory to {}", path.display()))?;
    store
        .load_data(path)
        .with_context(|| format!("reloading inventory from {}", path.display()))?;

    write_report(&store, &mut out)?;
    Ok(())
}
