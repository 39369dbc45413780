//! Validation of command-line values
//!
//! Each function checks one positional argument and returns a typed error
//! instead of terminating the process. They double as clap value parsers.

use crate::types::LoanError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Largest principal a borrower may request
pub const MAX_PRINCIPAL: Decimal = Decimal::from_parts(15000, 0, 0, false, 0);

/// Requested principals must be a multiple of this step
pub const PRINCIPAL_STEP: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Loan term used when none is given
pub const DEFAULT_TERM_MONTHS: u32 = 12;

/// Accept a catalog path naming a `.csv` file
pub fn parse_catalog_path(value: &str) -> Result<PathBuf, LoanError> {
    if value.ends_with(".csv") {
        Ok(PathBuf::from(value))
    } else {
        Err(LoanError::invalid_catalog_path(value))
    }
}

/// Accept a positive principal that is a multiple of 100 and at most 15000
pub fn parse_principal(value: &str) -> Result<Decimal, LoanError> {
    let principal = Decimal::from_str(value.trim())
        .map_err(|_| LoanError::invalid_principal(value, "not a number"))?;

    if principal <= Decimal::ZERO {
        return Err(LoanError::invalid_principal(value, "must be greater than zero"));
    }
    if !(principal % PRINCIPAL_STEP).is_zero() {
        return Err(LoanError::invalid_principal(value, "must be a multiple of 100"));
    }
    if principal > MAX_PRINCIPAL {
        return Err(LoanError::invalid_principal(value, "must be at most 15000"));
    }

    Ok(principal)
}

/// Accept a positive whole number of months
///
/// Integral decimals such as `12.0` are accepted.
pub fn parse_term_months(value: &str) -> Result<u32, LoanError> {
    let months = Decimal::from_str(value.trim()).map_err(|_| LoanError::invalid_term(value))?;

    if months <= Decimal::ZERO || !months.fract().is_zero() {
        return Err(LoanError::invalid_term(value));
    }

    months.to_u32().ok_or_else(|| LoanError::invalid_term(value))
}
