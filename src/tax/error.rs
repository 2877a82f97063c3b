use super::student_loan::StudentLoanPlan;
use super::uk::TaxYear;

#[derive(Debug, thiserror::Error)]
pub enum TaxError {
    #[error("unknown tax year: {0}")]
    UnknownTaxYear(TaxYear),
    #[error("invalid tax year: {0}")]
    InvalidTaxYear(String),
    #[error("student loan plan '{plan}' has no threshold for tax year {tax_year}")]
    UnknownStudentLoanPlan {
        plan: StudentLoanPlan,
        tax_year: TaxYear,
    },
    #[error("invalid constants for tax year {tax_year}: {reason}")]
    InvalidConstants { tax_year: TaxYear, reason: String },
    #[error("invalid constants table: {0}")]
    Json(#[from] serde_json::Error),
}
