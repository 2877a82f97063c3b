use super::calculate::{calculate_taxes, TaxInputs};
use super::constants::ConstantsTable;
use super::error::TaxError;
use rust_decimal::Decimal;

fn with_contribution(inputs: &TaxInputs, voluntary_contribution: Decimal) -> TaxInputs {
    let mut with = inputs.clone();
    with.pension.personal_contribution = voluntary_contribution;
    with
}

/// Reduction in combined taxes when the personal contribution is replaced by
/// `voluntary_contribution`. Positive means the contribution saves tax.
pub fn calculate_tax_savings(
    table: &ConstantsTable,
    inputs: &TaxInputs,
    voluntary_contribution: Decimal,
) -> Result<Decimal, TaxError> {
    let with = calculate_taxes(table, &with_contribution(inputs, voluntary_contribution))?;
    let without = calculate_taxes(table, inputs)?;
    let saving = without.combined_taxes - with.combined_taxes;
    log::debug!(
        "Voluntary contribution {} saves {}",
        voluntary_contribution,
        saving
    );
    Ok(saving)
}

/// Fall in take-home pay when the personal contribution is replaced by
/// `voluntary_contribution`. Zero when it matches the existing contribution.
pub fn take_home_cost(
    table: &ConstantsTable,
    inputs: &TaxInputs,
    voluntary_contribution: Decimal,
) -> Result<Decimal, TaxError> {
    let with = calculate_taxes(table, &with_contribution(inputs, voluntary_contribution))?;
    let without = calculate_taxes(table, inputs)?;
    Ok(without.take_home_pay - with.take_home_pay)
}
