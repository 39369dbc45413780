//! Plain-text loan report
//!
//! Formats a [`LoanSummary`] for the borrower. Rounding happens here and only
//! here: the rate is shown as a percentage to one decimal place and money to
//! two, rounding halves away from zero.

use crate::types::{LoanError, LoanSummary};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

/// Banner printed before a quote
pub const WELCOME_MESSAGE: &str = "\
Welcome! This tool finds the cheapest combination of lenders for your loan.
You can borrow from £100 to £15000 in steps of £100. Interest is compounded
monthly. Pass the number of months as the third argument to choose the loan
term; without it the loan runs for 12 months.
";

/// Write `summary` as the borrower-facing report
///
/// ```text
/// Requested amount: £1000
/// Rate: 7.0%
/// Monthly repayment: £89.36
/// Total repayment: £1072.33
/// ```
///
/// A `Funded amount` line follows the requested amount when the offers could
/// not cover the whole principal.
pub fn write_summary(summary: &LoanSummary, output: &mut dyn Write) -> Result<(), LoanError> {
    writeln!(
        output,
        "Requested amount: £{}",
        round(summary.requested_principal, 0)
    )?;
    if !summary.is_fully_funded() {
        writeln!(
            output,
            "Funded amount: £{}",
            round(summary.funded_principal, 0)
        )?;
    }
    writeln!(output, "Rate: {:.1}%", rate_percent(summary.weighted_rate))?;
    writeln!(
        output,
        "Monthly repayment: £{:.2}",
        round(summary.monthly_payment, 2)
    )?;
    writeln!(
        output,
        "Total repayment: £{:.2}",
        round(summary.total_repayment, 2)
    )?;
    output.flush()?;

    Ok(())
}

/// Annual rate as a percentage rounded to one decimal place
pub fn rate_percent(rate: Decimal) -> Decimal {
    round(rate * Decimal::ONE_HUNDRED, 1)
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
