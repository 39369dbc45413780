//! Monthly installment calculation

use crate::types::LoanError;
use rust_decimal::Decimal;

/// Spread `total_repayment` evenly over `term_months`
///
/// # Errors
///
/// `LoanError::InvalidTerm` if `term_months` is zero.
pub fn monthly_payment(total_repayment: Decimal, term_months: u32) -> Result<Decimal, LoanError> {
    if term_months == 0 {
        return Err(LoanError::invalid_term(term_months));
    }
    Ok(total_repayment / Decimal::from(term_months))
}
