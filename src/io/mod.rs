//! I/O module
//!
//! Handles the offer catalog and the borrower-facing report.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion)
//! - `catalog` - CSV-backed offer catalog
//! - `report` - Plain-text loan summary

pub mod catalog;
pub mod csv_format;
pub mod report;

pub use catalog::{read_offers, CsvOfferCatalog};
pub use csv_format::{convert_csv_record, CsvOfferRecord};
pub use report::{write_summary, WELCOME_MESSAGE};
