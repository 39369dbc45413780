//! Core traits for offer sources
//!
//! The quote engine only sees offers through [`OfferCatalog`], so a CSV file
//! and an in-memory list can be used interchangeably.

use crate::types::{LoanError, Offer};

/// Source of lending offers
///
/// Implementations return only validated offers; malformed records are
/// reported as `LoanError::DataFormat` and never reach the engine.
pub trait OfferCatalog {
    /// Load every offer in catalog order
    fn load(&self) -> Result<Vec<Offer>, LoanError>;
}

impl OfferCatalog for Vec<Offer> {
    fn load(&self) -> Result<Vec<Offer>, LoanError> {
        Ok(self.clone())
    }
}

impl OfferCatalog for [Offer] {
    fn load(&self) -> Result<Vec<Offer>, LoanError> {
        Ok(self.to_vec())
    }
}
