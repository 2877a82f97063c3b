//! Sweep command - evaluate a range of salaries with the same elections

use super::{format_amount, format_gbp, InputArgs};
use anyhow::ensure;
use clap::Args;
use rust_decimal::Decimal;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use takehome::tax::{calculate_taxes, ConstantsTable, TaxResult};

#[derive(Args, Debug)]
pub struct SweepCommand {
    /// Lowest gross income
    #[arg(long, default_value_t = Decimal::ZERO)]
    from: Decimal,

    /// Highest gross income (inclusive)
    #[arg(long)]
    to: Decimal,

    /// Increment between incomes
    #[arg(long, default_value_t = Decimal::from(10_000))]
    step: Decimal,

    #[command(flatten)]
    inputs: InputArgs,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the sweep table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct SweepRow {
    #[tabled(rename = "Gross")]
    pub gross_income: String,

    #[tabled(rename = "Income Tax")]
    pub income_tax: String,

    #[tabled(rename = "Employee NI")]
    pub employee_ni: String,

    #[tabled(rename = "Student Loan")]
    pub student_loan: String,

    #[tabled(rename = "Take-Home")]
    pub take_home_pay: String,

    #[tabled(rename = "Pension Pot")]
    pub pension_pot: String,

    #[tabled(rename = "Your Money")]
    pub your_money: String,

    #[tabled(rename = "Employer NI")]
    pub employer_ni: String,
}

impl SweepCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        ensure!(self.step > Decimal::ZERO, "--step must be positive");
        ensure!(self.from <= self.to, "--from must not exceed --to");

        let table = self.inputs.load_table()?;
        let results = sweep(&table, &self.inputs, self.from, self.to, self.step)?;
        log::info!("Evaluated {} incomes", results.len());

        if self.csv {
            self.write_csv(&results)
        } else {
            let rows: Vec<SweepRow> = results.iter().map(display_row).collect();
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
            Ok(())
        }
    }

    fn write_csv(&self, results: &[TaxResult]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for result in results {
            wtr.serialize(csv_row(result))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn sweep(
    table: &ConstantsTable,
    args: &InputArgs,
    from: Decimal,
    to: Decimal,
    step: Decimal,
) -> anyhow::Result<Vec<TaxResult>> {
    let mut results = Vec::new();
    let mut income = from;
    while income <= to {
        let inputs = args.to_inputs(table, income)?;
        results.push(calculate_taxes(table, &inputs)?);
        income += step;
    }
    Ok(results)
}

fn display_row(result: &TaxResult) -> SweepRow {
    row_with(result, format_gbp)
}

fn csv_row(result: &TaxResult) -> SweepRow {
    row_with(result, format_amount)
}

fn row_with(result: &TaxResult, fmt: impl Fn(Decimal) -> String) -> SweepRow {
    SweepRow {
        gross_income: fmt(result.gross_income),
        income_tax: fmt(result.income_tax.total),
        employee_ni: fmt(result.employee_ni.total),
        student_loan: fmt(result.student_loan),
        take_home_pay: fmt(result.take_home_pay),
        pension_pot: fmt(result.pension_pot),
        your_money: fmt(result.your_money),
        employer_ni: fmt(result.employer_ni.total),
    }
}
