//! Run configuration
//!
//! A [`LoanConfig`] is built once at the program boundary (from command-line
//! arguments) and passed to the runner. Nothing below the boundary reads
//! process arguments itself.

use crate::types::LoanRequest;
use std::path::PathBuf;

/// Everything one quote run needs
#[derive(Debug, Clone, PartialEq)]
pub struct LoanConfig {
    /// CSV file of lending offers
    pub catalog: PathBuf,

    /// Principal and term to quote
    pub request: LoanRequest,
}

impl LoanConfig {
    pub fn new(catalog: impl Into<PathBuf>, request: LoanRequest) -> Self {
        LoanConfig {
            catalog: catalog.into(),
            request,
        }
    }
}
