//! Schema command - print expected input formats

use clap::Args;
use schemars::schema_for;
use takehome::tax::{ConstantsTable, TaxInputs};

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which document to describe
    #[arg(value_enum, default_value = "constants")]
    kind: SchemaKind,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaKind {
    /// JSON Schema for a constants table passed with --constants
    Constants,
    /// JSON Schema for calculator inputs
    Inputs,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = match self.kind {
            SchemaKind::Constants => schema_for!(ConstantsTable),
            SchemaKind::Inputs => schema_for!(TaxInputs),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
