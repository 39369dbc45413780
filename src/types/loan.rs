//! Loan-related types
//!
//! This module defines the borrower's request, the plan of tranches that
//! funds it, and the final summary handed to the presentation layer.

use super::offer::Tranche;
use rust_decimal::Decimal;

/// Validated numeric input to the quote engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanRequest {
    /// Amount the borrower wants to borrow
    pub principal: Decimal,

    /// Loan term in whole months
    pub term_months: u32,
}

impl LoanRequest {
    pub fn new(principal: Decimal, term_months: u32) -> Self {
        LoanRequest {
            principal,
            term_months,
        }
    }
}

/// Ordered tranches composing a fully or partially funded loan
///
/// Tranches are in ascending rate order and their amounts sum to at most the
/// requested principal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanPlan {
    tranches: Vec<Tranche>,
}

impl LoanPlan {
    /// Build a plan from tranches already in allocation order
    pub(crate) fn from_tranches(tranches: Vec<Tranche>) -> Self {
        LoanPlan { tranches }
    }

    pub fn tranches(&self) -> &[Tranche] {
        &self.tranches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tranche> {
        self.tranches.iter()
    }

    pub fn len(&self) -> usize {
        self.tranches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tranches.is_empty()
    }

    /// Sum of all tranche amounts
    pub fn total_amount(&self) -> Decimal {
        self.tranches.iter().map(|t| t.amount).sum()
    }

    /// Amount of `requested` this plan could not fund (zero when fully funded)
    pub fn shortfall(&self, requested: Decimal) -> Decimal {
        (requested - self.total_amount()).max(Decimal::ZERO)
    }
}

impl<'a> IntoIterator for &'a LoanPlan {
    type Item = &'a Tranche;
    type IntoIter = std::slice::Iter<'a, Tranche>;

    fn into_iter(self) -> Self::IntoIter {
        self.tranches.iter()
    }
}

/// Final quote for a loan request
///
/// Values are unrounded; rounding is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanSummary {
    /// Principal the borrower asked for
    pub requested_principal: Decimal,

    /// Principal the offers actually cover
    ///
    /// Less than `requested_principal` when the catalog has insufficient supply.
    pub funded_principal: Decimal,

    /// Loan term in months
    pub term_months: u32,

    /// Amount-weighted average annual rate across the plan
    pub weighted_rate: Decimal,

    /// Total repayment divided evenly over the term
    pub monthly_payment: Decimal,

    /// Sum of every tranche after compounding over the term
    pub total_repayment: Decimal,
}

impl LoanSummary {
    /// Whether the offers covered the whole requested principal
    pub fn is_fully_funded(&self) -> bool {
        self.funded_principal >= self.requested_principal
    }
}
