pub mod allowance;
pub mod bands;
pub mod calculate;
pub mod constants;
pub mod error;
pub mod income;
pub mod ni;
pub mod pension;
pub mod savings;
pub mod student_loan;
pub mod uk;

// Flat public surface for domain types and functions.
pub use allowance::personal_allowance;
pub use bands::{allocate_bands, BandBreakdown, BandedTax, RateBand};
pub use calculate::{calculate_taxes, TaxInputs, TaxResult};
pub use constants::{
    ConstantsTable, IncomeTaxBands, NationalInsurance, PersonalAllowance, StudentLoans,
    TaxYearConstants,
};
pub use error::TaxError;
pub use income::calculate_income_tax;
pub use ni::{calculate_national_insurance, Contributor};
pub use pension::{gross_contribution, PensionContributions};
pub use savings::{calculate_tax_savings, take_home_cost};
pub use student_loan::{calculate_student_loan, StudentLoanPlan};
pub use uk::TaxYear;
