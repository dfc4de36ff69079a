//! JSON file persistence for [`Inventory`].
//!
//! The on-disk format is a flat UTF-8 JSON object mapping item name to
//! integer quantity, e.g. `{"apple": 7, "banana": -2}`. No schema version.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::item::ItemName;
use crate::store::Inventory;

/// Default location of the inventory file.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access inventory file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory for {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Inventory {
    /// Read an inventory from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Invalid UTF-8 surfaces here as a parse error, not an IO error.
        let items: HashMap<ItemName, i64> =
            serde_json::from_slice(&raw).map_err(|source| PersistError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { items })
    }

    /// Replace the whole inventory with the contents of `path`.
    ///
    /// The file is fully parsed before anything is swapped in; on error the
    /// current contents are left as they were.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        let loaded = Self::from_path(path)?;
        *self = loaded;
        tracing::info!(path = %path.display(), items = self.len(), "inventory loaded");
        Ok(())
    }

    /// Write the whole inventory to `path`, overwriting any existing file.
    ///
    /// Keys are written in sorted order so repeated saves produce stable files.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        let ordered: BTreeMap<&str, i64> = self
            .items
            .iter()
            .map(|(name, qty)| (name.as_str(), *qty))
            .collect();

        let json = serde_json::to_string_pretty(&ordered).map_err(|source| PersistError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

        std::fs::write(path, json).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), items = self.len(), "inventory saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Inventory {
        let mut inv = Inventory::new();
        inv.add("apple", 7).unwrap();
        inv.add("banana", -2).unwrap();
        inv
    }

    #[test]
    fn save_then_load_restores_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let inv = sample();
        inv.save(&path).unwrap();

        let mut restored = Inventory::new();
        restored.add("stale", 1).unwrap();
        restored.load(&path).unwrap();

        assert_eq!(restored, inv);
    }

    #[test]
    fn save_writes_flat_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        sample().save(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"apple": 7, "banana": -2}));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        sample().save(&path).unwrap();
        Inventory::new().save(&path).unwrap();

        assert!(Inventory::from_path(&path).unwrap().is_empty());
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("inventory.json");
        let err = sample().save(&path).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
    }

    #[test]
    fn encode_error_is_not_reported_as_malformed_file() {
        let source = serde_json::from_str::<i64>("x").unwrap_err();
        let err = PersistError::Encode {
            path: PathBuf::from("inventory.json"),
            source,
        };
        assert!(err.to_string().starts_with("failed to encode inventory"));
    }

    #[test]
    fn load_missing_file_is_io_error_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut inv = sample();

        let err = inv.load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
        assert_eq!(inv, sample());
    }

    #[test]
    fn load_malformed_file_is_parse_error_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let bodies: [&[u8]; 6] = [
            b"{not json",
            b"[1, 2, 3]",
            br#"{"apple": "ten"}"#,
            br#"{"apple": 2.5}"#,
            br#"{"": 3}"#,
            b"{\"a\xff\": 1}",
        ];
        for body in bodies {
            std::fs::write(&path, body).unwrap();
            let mut inv = sample();
            let err = inv.load(&path).unwrap_err();
            assert!(matches!(err, PersistError::Parse { .. }), "body: {body:?}");
            assert_eq!(inv, sample(), "body: {body:?}");
        }
    }

    #[test]
    fn load_keeps_whitespace_only_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{" ": 3}"#).unwrap();

        let inv = Inventory::from_path(&path).unwrap();
        assert_eq!(inv.get_quantity(" ").unwrap(), 3);
    }

    #[test]
    fn load_accepts_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "{}").unwrap();

        let mut inv = sample();
        inv.load(&path).unwrap();
        assert!(inv.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: save followed by load restores any inventory, including empty.
        #[test]
        fn round_trip_restores_any_inventory(
            entries in prop::collection::hash_map("[a-zA-Z ][a-zA-Z0-9 _-]{0,16}", any::<i64>(), 0..16)
        ) {
            let inv: Inventory = entries
                .into_iter()
                .map(|(k, v)| (ItemName::parse(&k).unwrap(), v))
                .collect();

            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("inventory.json");
            inv.save(&path).unwrap();

            let mut restored = Inventory::new();
            restored.load(&path).unwrap();
            prop_assert_eq!(restored, inv);
        }
    }
}
