pub mod calculate;
pub mod constants;
pub mod savings;
pub mod schema;
pub mod sweep;

use anyhow::Context;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use takehome::tax::{ConstantsTable, PensionContributions, StudentLoanPlan, TaxInputs, TaxYear};

/// Elections shared by every calculating command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Tax year (e.g., 2025, 2024/25 or 2024/2025). Defaults to the current tax year
    #[arg(short, long)]
    pub year: Option<TaxYear>,

    /// Pay Scottish income tax rates
    #[arg(long)]
    pub scotland: bool,

    /// Student loan repayment plan
    #[arg(short = 'l', long, value_enum, default_value_t = StudentLoanArg::None)]
    pub student_loan: StudentLoanArg,

    /// Do not pay National Insurance (e.g. over state pension age)
    #[arg(long)]
    pub no_ni: bool,

    /// Annual salary sacrificed into the pension
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub salary_sacrifice: Decimal,

    /// Auto-enrolment contribution as a percentage of salary
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub auto_enrolment: Decimal,

    /// Auto-enrolment is paid by salary sacrifice
    #[arg(long)]
    pub auto_enrolment_sacrifice: bool,

    /// Net personal pension contribution
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub personal_contribution: Decimal,

    /// Personal contribution is not grossed up by relief at source
    #[arg(long)]
    pub no_relief_at_source: bool,

    /// JSON constants table to use instead of the built-in one
    #[arg(short, long)]
    pub constants: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum StudentLoanArg {
    #[default]
    None,
    Plan1,
    Plan2,
    Plan4,
    Plan5,
    Postgrad,
}

impl From<StudentLoanArg> for StudentLoanPlan {
    fn from(arg: StudentLoanArg) -> Self {
        match arg {
            StudentLoanArg::None => StudentLoanPlan::None,
            StudentLoanArg::Plan1 => StudentLoanPlan::Plan1,
            StudentLoanArg::Plan2 => StudentLoanPlan::Plan2,
            StudentLoanArg::Plan4 => StudentLoanPlan::Plan4,
            StudentLoanArg::Plan5 => StudentLoanPlan::Plan5,
            StudentLoanArg::Postgrad => StudentLoanPlan::Postgrad,
        }
    }
}

impl InputArgs {
    pub fn load_table(&self) -> anyhow::Result<ConstantsTable> {
        read_table(self.constants.as_deref())
    }

    /// Build calculator inputs for `gross_income` against the loaded table
    pub fn to_inputs(
        &self,
        table: &ConstantsTable,
        gross_income: Decimal,
    ) -> anyhow::Result<TaxInputs> {
        Ok(TaxInputs {
            gross_income,
            tax_year: resolve_year(table, self.year)?,
            resident_in_scotland: self.scotland,
            student_loan: self.student_loan.into(),
            no_ni: self.no_ni,
            pension: PensionContributions {
                salary_sacrifice: self.salary_sacrifice,
                auto_enrolment_percentage: self.auto_enrolment,
                auto_enrolment_as_salary_sacrifice: self.auto_enrolment_sacrifice,
                personal_contribution: self.personal_contribution,
                tax_relief_at_source: !self.no_relief_at_source,
            },
        })
    }
}

/// Read a constants table from `path`, or the built-in table
pub fn read_table(path: Option<&Path>) -> anyhow::Result<ConstantsTable> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open constants file {}", path.display()))?;
            ConstantsTable::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to load constants from {}", path.display()))
        }
        None => Ok(ConstantsTable::builtin()),
    }
}

/// The requested year, else today's tax year if the table has it, else the latest
pub fn resolve_year(table: &ConstantsTable, year: Option<TaxYear>) -> anyhow::Result<TaxYear> {
    if let Some(year) = year {
        return Ok(year);
    }
    let current = TaxYear::from_date(chrono::Local::now().date_naive());
    if table.get(current).is_ok() {
        return Ok(current);
    }
    table
        .latest()
        .ok_or_else(|| anyhow::anyhow!("Constants table contains no tax years"))
}

/// Two decimal places, rounded (`{:.2}` alone truncates a Decimal)
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

pub fn format_gbp(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-£{}", format_amount(amount.abs()))
    } else {
        format!("£{}", format_amount(amount))
    }
}

pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
