//! Environment-driven configuration for the demo.

use std::path::PathBuf;

use stocktrack_core::Quantity;
use stocktrack_inventory::{DEFAULT_INVENTORY_FILE, DEFAULT_LOW_STOCK_THRESHOLD};

pub const INVENTORY_FILE_ENV: &str = "INVENTORY_FILE";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Where the store is saved to and reloaded from.
    pub inventory_file: PathBuf,
    pub low_stock_threshold: Quantity,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let inventory_file = lookup(INVENTORY_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.inventory_file);

        let low_stock_threshold = match lookup(LOW_STOCK_THRESHOLD_ENV) {
            None => defaults.low_stock_threshold,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    "{LOW_STOCK_THRESHOLD_ENV} is not an integer; using default {}",
                    defaults.low_stock_threshold
                );
                defaults.low_stock_threshold
            }),
        };

        Self {
            inventory_file,
            low_stock_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> DemoConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), DemoConfig::default());
        assert_eq!(DemoConfig::default().inventory_file, PathBuf::from("inventory.json"));
        assert_eq!(DemoConfig::default().low_stock_threshold, 5);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (INVENTORY_FILE_ENV, "/tmp/stock.json"),
            (LOW_STOCK_THRESHOLD_ENV, " 12 "),
        ]);
        assert_eq!(config.inventory_file, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.low_stock_threshold, 12);
    }

    #[test]
    fn bad_threshold_falls_back_to_default() {
        let config = config_from(&[(LOW_STOCK_THRESHOLD_ENV, "lots")]);
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}
