//! CSV offer catalog
//!
//! Reads lending offers from a CSV file with `Rate` and `Available` columns,
//! delegating field conversion to the csv_format module.
//!
//! ```no_run
//! use loan_quote::core::OfferCatalog;
//! use loan_quote::io::CsvOfferCatalog;
//!
//! let catalog = CsvOfferCatalog::new("market.csv");
//! match catalog.load() {
//!     Ok(offers) => println!("Loaded {} offers", offers.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing file is reported as `FileNotFound`, other open failures as `Io`
//! - The first malformed record aborts the load with `DataFormat`
//! - Line numbers are included in record errors for debugging

use crate::core::OfferCatalog;
use crate::io::csv_format::{convert_csv_record, CsvOfferRecord};
use crate::types::{LoanError, Offer};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;

/// Offer catalog backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvOfferCatalog {
    path: PathBuf,
}

impl CsvOfferCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvOfferCatalog { path: path.into() }
    }
}

impl OfferCatalog for CsvOfferCatalog {
    fn load(&self) -> Result<Vec<Offer>, LoanError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoanError::FileNotFound {
                path: self.path.display().to_string(),
            },
            _ => LoanError::Io {
                message: format!("Failed to open file '{}': {}", self.path.display(), e),
            },
        })?;

        read_offers(file)
    }
}

/// Read every offer from CSV data
///
/// The CSV reader is configured to:
/// - Trim whitespace from all fields
/// - Allow flexible field counts (extra columns are ignored)
///
/// # Returns
///
/// * `Ok(Vec<Offer>)` in file order
/// * `Err(LoanError::DataFormat)` for the first record that cannot be used
pub fn read_offers<R: Read>(reader: R) -> Result<Vec<Offer>, LoanError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    let mut offers = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Counts newlines inside quoted fields
        let line = record.position().map(|pos| pos.line());
        let csv_record: CsvOfferRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| LoanError::from(e).at_line(line))?;
        offers.push(convert_csv_record(csv_record, line)?);
    }

    Ok(offers)
}
