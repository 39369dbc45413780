//! Compound interest accrual
//!
//! Grows each tranche with discrete compounding over the loan term:
//!
//! ```text
//! final = amount * (1 + rate / n) ^ (years * n)
//! ```
//!
//! where `n` is the number of compounding periods per year. Interest is
//! compounded once over the whole term; there is no amortization schedule.

use crate::types::{LoanError, LoanPlan, Tranche};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

/// Monthly compounding
pub const MONTHLY_COMPOUNDING: u32 = 12;

// Month-derived year fractions such as 7/12 do not terminate in decimal, so
// the period count is rounded before deciding whether it is integral.
const PERIOD_COUNT_DP: u32 = 12;

/// Applies compound growth to tranches and loan plans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestEngine {
    periods_per_year: u32,
}

impl Default for InterestEngine {
    fn default() -> Self {
        InterestEngine {
            periods_per_year: MONTHLY_COMPOUNDING,
        }
    }
}

impl InterestEngine {
    /// Create an engine compounding `periods_per_year` times a year
    ///
    /// # Errors
    ///
    /// `LoanError::InvalidParameter` if `periods_per_year` is zero.
    pub fn new(periods_per_year: u32) -> Result<Self, LoanError> {
        if periods_per_year == 0 {
            return Err(LoanError::invalid_parameter(
                "periods_per_year",
                periods_per_year,
                "must be greater than zero",
            ));
        }
        Ok(InterestEngine { periods_per_year })
    }

    pub fn periods_per_year(&self) -> u32 {
        self.periods_per_year
    }

    /// Amount owed on one tranche after `term_years` of compounding
    ///
    /// # Errors
    ///
    /// `LoanError::InvalidParameter` if `term_years` is not positive or the
    /// result overflows.
    pub fn final_amount(&self, tranche: &Tranche, term_years: Decimal) -> Result<Decimal, LoanError> {
        if term_years <= Decimal::ZERO {
            return Err(LoanError::invalid_parameter(
                "term_years",
                term_years,
                "must be greater than zero",
            ));
        }

        let base = Decimal::from(self.periods_per_year);
        let factor = Decimal::ONE + tranche.rate / base;
        let periods = term_years
            .checked_mul(base)
            .ok_or_else(|| overflow("term_years", term_years))?
            .round_dp(PERIOD_COUNT_DP);

        let growth = if periods.fract().is_zero() {
            let whole = periods
                .to_u64()
                .ok_or_else(|| overflow("term_years", term_years))?;
            factor
                .checked_powu(whole)
                .ok_or_else(|| overflow("term_years", term_years))?
        } else {
            factor
                .checked_powd(periods)
                .ok_or_else(|| overflow("term_years", term_years))?
        };

        tranche
            .amount
            .checked_mul(growth)
            .ok_or_else(|| overflow("amount", tranche.amount))
    }

    /// Total owed across every tranche of `plan`
    pub fn total_repayment(&self, plan: &LoanPlan, term_years: Decimal) -> Result<Decimal, LoanError> {
        plan.iter().try_fold(Decimal::ZERO, |total, tranche| {
            let grown = self.final_amount(tranche, term_years)?;
            total
                .checked_add(grown)
                .ok_or_else(|| overflow("total_repayment", total))
        })
    }
}

fn overflow(name: &str, value: Decimal) -> LoanError {
    LoanError::invalid_parameter(name, value, "result overflows")
}
