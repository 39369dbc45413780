//! Loan quote engine
//!
//! This module provides the QuoteEngine that produces a [`LoanSummary`] by
//! sequencing the allocation and accrual steps:
//!
//! ```text
//! offers → sort by rate → allocate → compound per tranche → total repayment
//!                                  ↘ weighted rate
//!                    total repayment → monthly payment
//! ```
//!
//! The engine performs no I/O of its own. Offers come from an
//! [`OfferCatalog`], which may be a CSV file or an in-memory list.

use crate::core::allocator::allocate;
use crate::core::interest::InterestEngine;
use crate::core::payment::monthly_payment;
use crate::core::rate::weighted_rate;
use crate::core::traits::OfferCatalog;
use crate::types::{LoanError, LoanRequest, LoanSummary, Offer};
use rust_decimal::Decimal;

const MONTHS_PER_YEAR: u32 = 12;

/// Loan quote engine
///
/// Holds the interest engine used for accrual. The default compounds monthly.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteEngine {
    interest: InterestEngine,
}

impl QuoteEngine {
    /// Create a QuoteEngine with a custom interest engine
    pub fn new(interest: InterestEngine) -> Self {
        QuoteEngine { interest }
    }

    /// Load offers from `catalog` and quote `request` against them
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog cannot be loaded (`FileNotFound`, `Io`, `DataFormat`)
    /// - The request is out of range (`InvalidPrincipal`, `InvalidTerm`)
    /// - No offer funds any part of the loan (`EmptyPlan`)
    pub fn quote<C>(&self, request: &LoanRequest, catalog: &C) -> Result<LoanSummary, LoanError>
    where
        C: OfferCatalog + ?Sized,
    {
        if request.term_months == 0 {
            return Err(LoanError::invalid_term(request.term_months));
        }

        let offers = catalog.load()?;
        tracing::info!(offers = offers.len(), "loaded lending offers");

        self.quote_offers(request, &offers)
    }

    /// Quote `request` against an in-memory list of offers
    ///
    /// # Arguments
    ///
    /// * `request` - Principal and term in months
    /// * `offers` - Offers in catalog order
    ///
    /// # Returns
    ///
    /// A LoanSummary with unrounded values. If the offers cannot cover the
    /// principal, the summary describes the partially funded loan.
    pub fn quote_offers(
        &self,
        request: &LoanRequest,
        offers: &[Offer],
    ) -> Result<LoanSummary, LoanError> {
        if request.term_months == 0 {
            return Err(LoanError::invalid_term(request.term_months));
        }
        let term_years = months_to_years(request.term_months);

        let plan = allocate(request.principal, offers)?;
        let shortfall = plan.shortfall(request.principal);
        if !shortfall.is_zero() {
            tracing::warn!(
                requested = %request.principal,
                funded = %plan.total_amount(),
                %shortfall,
                "offers cannot cover the requested principal"
            );
        }

        let total_repayment = self.interest.total_repayment(&plan, term_years)?;
        let weighted_rate = weighted_rate(&plan)?;
        let monthly_payment = monthly_payment(total_repayment, request.term_months)?;

        Ok(LoanSummary {
            requested_principal: request.principal,
            funded_principal: plan.total_amount(),
            term_months: request.term_months,
            weighted_rate,
            monthly_payment,
            total_repayment,
        })
    }
}

/// Convert a term in months to years
pub fn months_to_years(months: u32) -> Decimal {
    Decimal::from(months) / Decimal::from(MONTHS_PER_YEAR)
}
