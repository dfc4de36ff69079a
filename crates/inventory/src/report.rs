use std::io::{self, Write};

use crate::store::Inventory;

/// Human-readable listing of every item, in unspecified order.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    inventory: &'a Inventory,
}

impl core::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report")?;
        for (name, qty) in self.inventory.iter() {
            writeln!(f, "{name} -> {qty}")?;
        }
        Ok(())
    }
}

impl Inventory {
    pub fn report(&self) -> Report<'_> {
        Report { inventory: self }
    }

    pub fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.report())
    }

    /// Print the report to stdout.
    pub fn print_report(&self) {
        print!("{}", self.report());
    }
}
