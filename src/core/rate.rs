//! Amount-weighted average rate of a loan plan

use crate::types::{LoanError, LoanPlan};
use rust_decimal::Decimal;

/// Blended annual rate of `plan`: `sum(rate * amount) / sum(amount)`
///
/// # Errors
///
/// `LoanError::EmptyPlan` when the plan has no tranches or its total is zero,
/// `LoanError::InvalidParameter` when the weighted sum overflows.
pub fn weighted_rate(plan: &LoanPlan) -> Result<Decimal, LoanError> {
    let total = plan.total_amount();
    if plan.is_empty() || total.is_zero() {
        return Err(LoanError::EmptyPlan);
    }

    let weighted = plan.iter().try_fold(Decimal::ZERO, |sum, tranche| {
        tranche
            .rate
            .checked_mul(tranche.amount)
            .and_then(|product| sum.checked_add(product))
            .ok_or_else(|| LoanError::invalid_parameter("rate", tranche.rate, "weighted sum overflows"))
    })?;
    Ok(weighted / total)
}
