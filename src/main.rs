//! BAI2 record lister
//!
//! Command-line interface for assembling the logical records of a BAI2
//! statement file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- statement.bai
//! cargo run -- --mode strict statement.bai
//! RUST_LOG=debug cargo run -- statement.bai
//! ```
//!
//! One listing line per logical record is written to stdout. Diagnostics go
//! to stderr, filtered by `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unreadable file, malformed record, etc.)

use bai2_records::cli;
use bai2_records::pipeline;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let config = args.to_parser_config();

    let mut output = std::io::stdout().lock();
    if let Err(e) = pipeline::process_file(&args.input_file, config, &mut output) {
        error!("{}", e);
        process::exit(1);
    }
}
