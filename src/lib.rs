//! UK take-home pay: income tax, National Insurance, student loan and pension
//! contributions for a single tax year.

pub mod tax;
