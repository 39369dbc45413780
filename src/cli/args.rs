use crate::cli::validation::{
    parse_catalog_path, parse_principal, parse_term_months, DEFAULT_TERM_MONTHS,
};
use crate::config::LoanConfig;
use crate::types::LoanRequest;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Quote the cheapest loan available from a market of lenders
#[derive(Parser, Debug)]
#[command(name = "loan-quote")]
#[command(about = "Quote the cheapest loan available from a market of lenders", long_about = None)]
pub struct CliArgs {
    /// CSV file of lending offers with Rate and Available columns
    #[arg(value_name = "CATALOG", value_parser = parse_catalog_path)]
    pub catalog: PathBuf,

    /// Amount to borrow
    #[arg(
        value_name = "AMOUNT",
        value_parser = parse_principal,
        help = "Amount to borrow: a multiple of 100 between 100 and 15000"
    )]
    pub principal: Decimal,

    /// Loan term in months
    #[arg(
        value_name = "MONTHS",
        value_parser = parse_term_months,
        help = "Loan term in months (default: 12)"
    )]
    pub term_months: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Create a LoanConfig from CLI arguments
    ///
    /// Falls back to a 12 month term when none was given and logs the
    /// assumption.
    pub fn to_loan_config(&self) -> LoanConfig {
        let term_months = self.term_months.unwrap_or_else(|| {
            tracing::info!(
                months = DEFAULT_TERM_MONTHS,
                "no loan term given, assuming {} months",
                DEFAULT_TERM_MONTHS
            );
            DEFAULT_TERM_MONTHS
        });

        LoanConfig::new(
            self.catalog.clone(),
            LoanRequest::new(self.principal, term_months),
        )
    }
}
