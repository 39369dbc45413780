//! Loan Quote Library
//! # Overview
//!
//! This library quotes a loan assembled from multiple lenders, drawing the
//! cheapest capital first, and reports the blended rate, monthly installment
//! and total repayment.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Offer, Tranche, LoanPlan, LoanSummary, etc.)
//! - [`cli`] - CLI arguments parsing and validation
//! - [`config`] - Run configuration built at the program boundary
//! - [`core`] - Business logic components:
//!   - [`core::allocator`] - Lowest-rate-first allocation of the principal
//!   - [`core::interest`] - Monthly compounding per tranche
//!   - [`core::rate`] - Amount-weighted average rate
//!   - [`core::payment`] - Monthly installment
//!   - [`core::engine`] - Quote orchestration
//! - [`io`] - CSV offer catalog and report output
//! - [`runner`] - One complete quote run
//! - [`logging`] - tracing subscriber setup
//!
//! # Quote Pipeline
//!
//! 1. Offers are sorted by ascending rate (ties keep catalog order)
//! 2. The principal is filled from the cheapest offers; the last draw is capped
//! 3. Each tranche is compounded monthly over the term and summed
//! 4. The blended rate is the amount-weighted mean of the tranche rates
//! 5. The monthly installment is the total repayment spread over the term
//!
//! If the catalog cannot cover the principal, the quote describes the
//! partially funded loan instead of failing.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod runner;
pub mod types;

pub use config::LoanConfig;
pub use crate::core::{InterestEngine, OfferCatalog, QuoteEngine};
pub use io::{write_summary, CsvOfferCatalog};
pub use types::{LoanError, LoanPlan, LoanRequest, LoanSummary, Offer, Tranche};
