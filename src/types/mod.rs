//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `offer`: Lending offers and the tranches drawn from them
//! - `loan`: Loan requests, plans, and summaries
//! - `error`: Error types for the quote engine

pub mod error;
pub mod loan;
pub mod offer;

pub use error::LoanError;
pub use loan::{LoanPlan, LoanRequest, LoanSummary};
pub use offer::{Offer, Tranche};
