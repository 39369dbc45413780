//! Logging setup
//!
//! Library code logs through `tracing` macros; the binary installs a compact
//! stderr subscriber so stdout carries only the report.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence. Otherwise the crate logs at `info`, or at
/// `debug` when `verbose` is set.
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("loan_quote=debug,warn")
    } else {
        EnvFilter::new("loan_quote=info,warn")
    }
}

