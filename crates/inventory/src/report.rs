//! Plain-text stock reports.

use std::io::{self, Write};

use crate::store::InventoryStore;

/// Write the `Items Report` header followed by one `item -> quantity` line
/// per item.
pub fn write_report<W: Write>(store: &InventoryStore, mut out: W) -> io::Result<()> {
    writeln!(out, "Items Report")?;
    for (item, qty) in store.iter() {
        writeln!(out, "{item} -> {qty}")?;
    }
    Ok(())
}

/// Print the report to stdout.
///
/// A closed or broken stdout is not worth failing over; the error is logged.
pub fn print_data(store: &InventoryStore) {
    let stdout = io::stdout();
    if let Err(e) = write_report(store, stdout.lock()) {
        tracing::warn!(error = %e, "failed to print inventory report");
    }
}
