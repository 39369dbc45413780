//! Quote run
//!
//! Wires one run together: CSV catalog → QuoteEngine → report.
//!
//! ```no_run
//! use loan_quote::config::LoanConfig;
//! use loan_quote::runner;
//! use loan_quote::types::LoanRequest;
//! use rust_decimal::Decimal;
//!
//! let config = LoanConfig::new("market.csv", LoanRequest::new(Decimal::new(1000, 0), 36));
//! let mut output = std::io::stdout();
//!
//! match runner::run(&config, &mut output) {
//!     Ok(summary) => eprintln!("Quoted {} months", summary.term_months),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use crate::config::LoanConfig;
use crate::core::QuoteEngine;
use crate::io::{write_summary, CsvOfferCatalog};
use crate::types::{LoanError, LoanSummary};
use std::io::Write;

/// Quote the configured request against its catalog and write the report
///
/// # Returns
///
/// * `Ok(LoanSummary)` once the report has been written to `output`
/// * `Err(LoanError)` if loading, quoting or writing failed
pub fn run(config: &LoanConfig, output: &mut dyn Write) -> Result<LoanSummary, LoanError> {
    let catalog = CsvOfferCatalog::new(config.catalog.clone());
    tracing::debug!(catalog = %config.catalog.display(), "reading offers");

    let summary = QuoteEngine::default().quote(&config.request, &catalog)?;
    write_summary(&summary, output)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LoanRequest;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn config(path: &Path, principal: i64, months: u32) -> LoanConfig {
        LoanConfig::new(path, LoanRequest::new(Decimal::new(principal, 0), months))
    }

    #[test]
    fn test_run_writes_report() {
        let file = create_temp_csv("Lender,Rate,Available\nAnn,0.12,1000\n");
        let mut output = Vec::new();

        let summary = run(&config(file.path(), 1000, 12), &mut output).unwrap();

        assert!(summary.is_fully_funded());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Requested amount: £1000\n\
             Rate: 12.0%\n\
             Monthly repayment: £93.90\n\
             Total repayment: £1126.83\n"
        );
    }

    #[test]
    fn test_run_missing_catalog() {
        let mut output = Vec::new();

        let result = run(&config(Path::new("nonexistent.csv"), 1000, 12), &mut output);

        assert!(matches!(result, Err(LoanError::FileNotFound { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_malformed_catalog_writes_nothing() {
        let file = create_temp_csv("Lender,Rate,Available\nAnn,twelve,1000\n");
        let mut output = Vec::new();

        let result = run(&config(file.path(), 1000, 12), &mut output);

        assert!(matches!(result, Err(LoanError::DataFormat { .. })));
        assert!(output.is_empty());
    }
}
