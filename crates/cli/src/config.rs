use std::path::PathBuf;

use stockkeep_inventory::DEFAULT_INVENTORY_PATH;

/// Environment variable overriding the inventory file location.
pub const INVENTORY_PATH_ENV: &str = "STOCKKEEP_INVENTORY_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub inventory_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(INVENTORY_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => Self {
                inventory_path: PathBuf::from(path),
            },
            None => {
                tracing::debug!("{INVENTORY_PATH_ENV} not set; using {DEFAULT_INVENTORY_PATH}");
                Self::default()
            }
        }
    }
}
