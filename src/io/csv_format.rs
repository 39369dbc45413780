//! CSV format handling for offer records
//!
//! This module centralizes the catalog's CSV format concerns:
//! - CsvOfferRecord structure for deserialization
//! - Conversion from CSV records to validated offers
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{LoanError, Offer};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the catalog columns `Rate` and `Available`. Any other columns
/// (lender name, for example) are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvOfferRecord {
    #[serde(rename = "Rate")]
    pub rate: String,
    #[serde(rename = "Available")]
    pub available: String,
}

/// Convert a CsvOfferRecord to an Offer
///
/// Parses both fields as decimals and rejects empty or negative values.
/// `line` is the catalog line the record started on, when known.
///
/// # Returns
///
/// * `Ok(Offer)` - Successfully converted record
/// * `Err(LoanError::DataFormat)` - The record cannot be used as an offer
pub fn convert_csv_record(csv_record: CsvOfferRecord, line: Option<u64>) -> Result<Offer, LoanError> {
    let rate = parse_field("rate", &csv_record.rate, line)?;
    let available = parse_field("available amount", &csv_record.available, line)?;

    Offer::new(rate, available).map_err(|e| e.at_line(line))
}

fn parse_field(name: &str, raw: &str, line: Option<u64>) -> Result<Decimal, LoanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LoanError::data_format(line, format!("missing {}", name)));
    }
    Decimal::from_str(trimmed)
        .map_err(|_| LoanError::data_format(line, format!("invalid {} '{}'", name, raw)))
}
