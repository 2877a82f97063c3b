//! Constants command - print the rates and thresholds in use

use super::read_table;
use clap::Args;
use std::path::PathBuf;
use takehome::tax::{ConstantsTable, TaxYear};

#[derive(Args, Debug)]
pub struct ConstantsCommand {
    /// Only print this tax year (e.g., 2025 or 2024/25)
    #[arg(short, long)]
    year: Option<TaxYear>,

    /// JSON constants table to validate and print instead of the built-in one
    #[arg(short, long)]
    constants: Option<PathBuf>,
}

impl ConstantsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let table = read_table(self.constants.as_deref())?;
        let table = match self.year {
            Some(year) => ConstantsTable {
                years: vec![table.get(year)?.clone()],
            },
            None => table,
        };
        println!("{}", serde_json::to_string_pretty(&table)?);
        Ok(())
    }
}
