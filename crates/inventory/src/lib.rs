//! Inventory store: item quantities held in memory, persisted as JSON.
//!
//! The store itself is plain deterministic logic over a map; file access is
//! confined to [`persist`].

pub mod item;
pub mod log;
pub mod persist;
pub mod report;
pub mod store;

pub use item::ItemName;
pub use log::{StockLog, StockLogEntry};
pub use persist::{DEFAULT_INVENTORY_PATH, PersistError};
pub use report::Report;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, RemoveOutcome};
