//! Calculate command - full take-home breakdown for one salary

use super::{format_gbp, format_rate, InputArgs};
use clap::Args;
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use takehome::tax::{calculate_taxes, BandedTax, TaxResult};

#[derive(Args, Debug)]
pub struct CalculateCommand {
    /// Gross annual income
    income: Decimal,

    #[command(flatten)]
    inputs: InputArgs,

    /// Output as JSON instead of formatted tables
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Debug, Clone, Tabled)]
struct BandRow {
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Tax")]
    amount: String,
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let table = self.inputs.load_table()?;
        let inputs = self.inputs.to_inputs(&table, self.income)?;
        let result = calculate_taxes(&table, &inputs)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_result(&result);
        }
        Ok(())
    }
}

fn print_result(result: &TaxResult) {
    println!();
    println!("TAKE-HOME PAY ({})", result.tax_year);
    if let (Some(start), Some(end)) = (result.tax_year.start_date(), result.tax_year.end_date()) {
        println!("{} to {}", start.format("%-d %B %Y"), end.format("%-d %B %Y"));
    }
    println!();

    let rows = vec![
        row("Gross income", result.gross_income),
        row("After salary sacrifice", result.income_after_salary_sacrifice),
        row("Adjusted net income", result.adjusted_net_income),
        row("Personal allowance", result.personal_allowance),
        row("Taxable income", result.taxable_income),
        row("Income tax", result.income_tax.total),
        row("Employee NI", result.employee_ni.total),
        row("Student loan", result.student_loan),
        row("Combined taxes", result.combined_taxes),
        row("Take-home pay", result.take_home_pay),
        row("Pension pot", result.pension_pot),
        row("Your money", result.your_money),
        row("Employer NI", result.employer_ni.total),
    ];
    println!("{}", right_aligned(Table::new(rows)));

    print_bands("INCOME TAX", &result.income_tax);
    print_bands("EMPLOYEE NI", &result.employee_ni);
    print_bands("EMPLOYER NI", &result.employer_ni);
}

fn row(item: &'static str, amount: Decimal) -> SummaryRow {
    SummaryRow {
        item,
        amount: format_gbp(amount),
    }
}

fn print_bands(title: &str, tax: &BandedTax) {
    if tax.breakdown.is_empty() {
        return;
    }
    let rows: Vec<BandRow> = tax
        .breakdown
        .iter()
        .map(|b| BandRow {
            rate: format_rate(b.rate),
            amount: format_gbp(b.amount),
        })
        .collect();
    println!();
    println!("{}", title);
    println!("{}", right_aligned(Table::new(rows)));
}

fn right_aligned(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}
