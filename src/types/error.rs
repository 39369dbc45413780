//! Error types for the loan quote engine
//!
//! This module defines all error types that can occur while loading offers,
//! validating borrower input, and computing a quote.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Catalog not found, permission denied, etc.
//! - **Catalog Errors**: Malformed `Rate` / `Available` fields
//! - **Input Errors**: Invalid catalog path, principal, or loan term
//! - **Computation Errors**: Invalid parameters, empty loan plans

use thiserror::Error;

/// Main error type for the loan quote engine
///
/// Every variant aborts the computation it occurs in. The caller decides
/// whether to report and exit or to retry with corrected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    /// Catalog file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the catalog or writing the report
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A catalog record could not be read as a lending offer
    ///
    /// Raised for missing columns, unparseable numbers and negative values.
    /// Loading stops at the first malformed record.
    #[error("Malformed catalog record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    DataFormat {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// Catalog argument does not name a CSV file
    #[error("Invalid catalog path '{path}': expected a .csv file")]
    InvalidCatalogPath {
        /// The rejected path
        path: String,
    },

    /// Requested principal is not an acceptable borrowing amount
    #[error("Invalid principal '{value}': {reason}")]
    InvalidPrincipal {
        /// The rejected value as supplied
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Numeric parameter outside the domain of the interest formula
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// The rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Loan plan has no funded amount to average over
    #[error("Loan plan is empty: no offers could fund the loan")]
    EmptyPlan,

    /// Loan term is not a positive whole number of months
    #[error("Invalid loan term '{value}': expected a positive whole number of months")]
    InvalidTerm {
        /// The rejected value as supplied
        value: String,
    },
}

// Conversion from io::Error to LoanError
impl From<std::io::Error> for LoanError {
    fn from(error: std::io::Error) -> Self {
        LoanError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LoanError
impl From<csv::Error> for LoanError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(_) = error.kind() {
            return LoanError::Io {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        LoanError::DataFormat {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LoanError {
    /// Create a DataFormat error
    pub fn data_format(line: Option<u64>, message: impl Into<String>) -> Self {
        LoanError::DataFormat {
            line,
            message: message.into(),
        }
    }

    /// Attach a catalog line to a DataFormat error; other errors pass through
    pub fn at_line(self, line: Option<u64>) -> Self {
        match self {
            LoanError::DataFormat { message, .. } => LoanError::DataFormat { line, message },
            other => other,
        }
    }

    /// Create an InvalidCatalogPath error
    pub fn invalid_catalog_path(path: &str) -> Self {
        LoanError::InvalidCatalogPath {
            path: path.to_string(),
        }
    }

    /// Create an InvalidPrincipal error
    pub fn invalid_principal(value: impl ToString, reason: &str) -> Self {
        LoanError::InvalidPrincipal {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidParameter error
    pub fn invalid_parameter(name: &str, value: impl ToString, reason: &str) -> Self {
        LoanError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidTerm error
    pub fn invalid_term(value: impl ToString) -> Self {
        LoanError::InvalidTerm {
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        LoanError::FileNotFound { path: "market.csv".to_string() },
        "File not found: market.csv"
    )]
    #[case::io_error(
        LoanError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::data_format_with_line(
        LoanError::DataFormat { line: Some(4), message: "invalid rate 'abc'".to_string() },
        "Malformed catalog record at line 4: invalid rate 'abc'"
    )]
    #[case::data_format_without_line(
        LoanError::DataFormat { line: None, message: "missing field `Rate`".to_string() },
        "Malformed catalog record: missing field `Rate`"
    )]
    #[case::invalid_catalog_path(
        LoanError::InvalidCatalogPath { path: "market.exe".to_string() },
        "Invalid catalog path 'market.exe': expected a .csv file"
    )]
    #[case::invalid_principal(
        LoanError::InvalidPrincipal { value: "150".to_string(), reason: "must be a multiple of 100".to_string() },
        "Invalid principal '150': must be a multiple of 100"
    )]
    #[case::invalid_parameter(
        LoanError::InvalidParameter { name: "term_years".to_string(), value: "-1".to_string(), reason: "must be positive".to_string() },
        "Invalid parameter term_years = -1: must be positive"
    )]
    #[case::empty_plan(
        LoanError::EmptyPlan,
        "Loan plan is empty: no offers could fund the loan"
    )]
    #[case::invalid_term(
        LoanError::InvalidTerm { value: "0".to_string() },
        "Invalid loan term '0': expected a positive whole number of months"
    )]
    fn test_error_display(#[case] error: LoanError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::data_format(
        LoanError::data_format(Some(2), "bad"),
        LoanError::DataFormat { line: Some(2), message: "bad".to_string() }
    )]
    #[case::invalid_principal(
        LoanError::invalid_principal(0, "must be positive"),
        LoanError::InvalidPrincipal { value: "0".to_string(), reason: "must be positive".to_string() }
    )]
    #[case::invalid_parameter(
        LoanError::invalid_parameter("periods_per_year", 0, "must be positive"),
        LoanError::InvalidParameter {
            name: "periods_per_year".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        }
    )]
    #[case::invalid_term(
        LoanError::invalid_term("0.5"),
        LoanError::InvalidTerm { value: "0.5".to_string() }
    )]
    fn test_helper_functions(#[case] result: LoanError, #[case] expected: LoanError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LoanError = io_error.into();
        assert!(matches!(error, LoanError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_csv_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LoanError = csv::Error::from(io_error).into();
        match error {
            LoanError::Io { message } => assert!(message.contains("Permission denied")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[rstest]
    #[case::sets_line(LoanError::data_format(None, "bad"), Some(5), LoanError::data_format(Some(5), "bad"))]
    #[case::replaces_line(LoanError::data_format(Some(2), "bad"), Some(7), LoanError::data_format(Some(7), "bad"))]
    #[case::other_variants_untouched(LoanError::EmptyPlan, Some(3), LoanError::EmptyPlan)]
    fn test_at_line(#[case] error: LoanError, #[case] line: Option<u64>, #[case] expected: LoanError) {
        assert_eq!(error.at_line(line), expected);
    }
}
