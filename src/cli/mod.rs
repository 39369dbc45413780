// CLI module
// Command-line interface, argument parsing and validation

mod args;
pub mod validation;

pub use args::CliArgs;
pub use validation::{parse_catalog_path, parse_principal, parse_term_months};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// This function parses the command-line arguments and returns a `CliArgs` struct
/// containing the parsed values. If parsing fails (e.g., invalid arguments, missing
/// required arguments, or --help flag), clap will automatically display an error
/// message or help text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
