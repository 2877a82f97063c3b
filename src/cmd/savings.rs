//! Savings command - tax saved by a voluntary pension contribution

use super::{format_amount, format_gbp, InputArgs};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use takehome::tax::{calculate_tax_savings, gross_contribution, take_home_cost};

#[derive(Args, Debug)]
pub struct SavingsCommand {
    /// Gross annual income
    income: Decimal,

    /// Voluntary personal contribution to compare against the current one
    #[arg(long)]
    contribution: Decimal,

    #[command(flatten)]
    inputs: InputArgs,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SavingsData {
    tax_year: String,
    contribution: String,
    gross_contribution: String,
    tax_saving: String,
    net_cost: String,
}

impl SavingsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let table = self.inputs.load_table()?;
        let inputs = self.inputs.to_inputs(&table, self.income)?;
        let saving = calculate_tax_savings(&table, &inputs, self.contribution)?;
        let gross = gross_contribution(self.contribution, inputs.pension.tax_relief_at_source);
        let net_cost = take_home_cost(&table, &inputs, self.contribution)?;

        if self.json {
            let data = SavingsData {
                tax_year: inputs.tax_year.display(),
                contribution: format_amount(self.contribution),
                gross_contribution: format_amount(gross),
                tax_saving: format_amount(saving),
                net_cost: format_amount(net_cost),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            println!();
            println!("PENSION CONTRIBUTION SAVINGS ({})", inputs.tax_year);
            println!();
            println!(
                "  Contribution: {} (into pension: {})",
                format_gbp(self.contribution),
                format_gbp(gross)
            );
            println!("  Tax saving: {}", format_gbp(saving));
            println!("  Cost to take-home pay: {}", format_gbp(net_cost));
            println!();
        }
        Ok(())
    }
}
