//! Loan Quote CLI
//!
//! Command-line interface for quoting a loan from a CSV market of lenders.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- market.csv 1000
//! cargo run -- market.csv 1500 36
//! cargo run -- --verbose market.csv 2300 24
//! ```
//!
//! The program reads lending offers from the catalog, fills the requested
//! amount from the cheapest offers, and prints the quote to stdout. Logs go
//! to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (catalog not found, malformed catalog, no offers, etc.)
//! - 2: Invalid arguments (reported by clap)

use loan_quote::cli;
use loan_quote::io::WELCOME_MESSAGE;
use loan_quote::{logging, runner};
use std::process;

fn main() {
    // Parse and validate command-line arguments using clap
    let args = cli::parse_args();
    logging::init_logger(args.verbose);

    let config = args.to_loan_config();

    println!("{}", WELCOME_MESSAGE);

    let mut output = std::io::stdout();
    if let Err(e) = runner::run(&config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
