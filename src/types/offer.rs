//! Lending offer types
//!
//! An [`Offer`] is what a lender puts on the market; a [`Tranche`] is the part
//! of an offer the borrower actually draws.

use super::error::LoanError;
use rust_decimal::Decimal;

/// A lender's terms: annual nominal rate and the amount available at that rate
///
/// Both fields are non-negative. Offers are created by a catalog and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    /// Annual nominal interest rate as a fraction (0.07 is 7%)
    pub rate: Decimal,

    /// Amount the lender is willing to lend at `rate`
    pub available: Decimal,
}

impl Offer {
    /// Create a new offer, rejecting negative values
    ///
    /// # Arguments
    ///
    /// * `rate` - Annual nominal rate as a fraction
    /// * `available` - Amount available at that rate
    ///
    /// # Returns
    ///
    /// * `Ok(Offer)` when both values are non-negative
    /// * `Err(LoanError::DataFormat)` otherwise
    pub fn new(rate: Decimal, available: Decimal) -> Result<Self, LoanError> {
        if rate < Decimal::ZERO {
            return Err(LoanError::data_format(
                None,
                format!("rate {} is negative", rate),
            ));
        }
        if available < Decimal::ZERO {
            return Err(LoanError::data_format(
                None,
                format!("available amount {} is negative", available),
            ));
        }

        Ok(Offer { rate, available })
    }
}

/// Portion of an offer drawn into a loan
///
/// `amount` is always positive and never exceeds the source offer's
/// `available` amount. Only the allocator creates tranches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tranche {
    /// Rate inherited from the source offer
    pub rate: Decimal,

    /// Amount drawn from the source offer
    pub amount: Decimal,
}
