//! Core business logic module
//!
//! This module contains the lending-allocation and interest-accrual pipeline:
//! - `traits` - Offer catalog abstraction
//! - `allocator` - Lowest-rate-first allocation of the principal
//! - `interest` - Compound interest per tranche and total repayment
//! - `rate` - Amount-weighted average rate
//! - `payment` - Monthly installment
//! - `engine` - Quote orchestration

pub mod allocator;
pub mod engine;
pub mod interest;
pub mod payment;
pub mod rate;
pub mod traits;

pub use allocator::{allocate, sort_by_rate};
pub use engine::{months_to_years, QuoteEngine};
pub use interest::{InterestEngine, MONTHLY_COMPOUNDING};
pub use payment::monthly_payment;
pub use rate::weighted_rate;
pub use traits::OfferCatalog;
