use std::io::Write;

use anyhow::Context;
use serde_json::json;

use stockkeep_inventory::{Inventory, StockLog};

use crate::config::DemoConfig;

/// Run the fixed walkthrough against a fresh inventory, writing output to `out`.
///
/// Returns the reloaded inventory. A missing item on the quantity query is
/// surfaced as an error rather than handled.
pub fn run_demo(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::new();
    let mut log = StockLog::new();

    inventory.add_logged("apple", 10, &mut log)?;
    inventory.add_logged("banana", -2, &mut log)?;

    if let Err(err) = inventory.add_untyped(&json!(123), &json!("ten")) {
        tracing::warn!(error = %err, "invalid add skipped");
    }

    inventory.remove("apple", 3)?;
    inventory.remove("orange", 1)?;

    let apple = inventory.get_quantity("apple")?;
    writeln!(out, "Apple stock: {apple}")?;

    let mut low: Vec<&str> = inventory.list_low_default().into_iter().map(|n| n.as_str()).collect();
    low.sort_unstable();
    writeln!(out, "Low items: {low:?}")?;

    inventory
        .save(&config.inventory_path)
        .context("saving demo inventory")?;
    inventory
        .load(&config.inventory_path)
        .context("reloading demo inventory")?;

    inventory.write_report(out)?;

    for line in log.lines() {
        tracing::debug!("{line}");
    }

    Ok(inventory)
}
