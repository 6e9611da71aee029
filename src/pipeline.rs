//! File processing pipeline
//!
//! Orchestrates record listing for a BAI2 file by coordinating between the
//! `LineReader` (physical lines), the `RecordStream` (record assembly) and
//! the output writer.
//!
//! Each record is written as one listing line in its `Display` form. This is
//! a diagnostic view of the assembled records, not an interchange format.

use crate::config::ParserConfig;
use crate::core::RecordStream;
use crate::io::LineReader;
use crate::types::ParseError;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Logical records written
    pub records: usize,
    /// Physical lines consumed
    pub lines: usize,
}

/// Read `input_path`, assemble its records and list them to `output`
///
/// Stops at the first error; records listed before it have already been
/// written.
///
/// # Errors
///
/// * `FileNotFound` / `Io` if the file cannot be opened, read or the listing
///   cannot be written
/// * Any line or record error raised while assembling records
///
/// # Examples
///
/// ```no_run
/// use bai2_records::config::ParserConfig;
/// use bai2_records::pipeline::process_file;
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// let summary = process_file(Path::new("statement.bai"), ParserConfig::strict(), &mut output)
///     .expect("Processing failed");
/// println!("{} records", summary.records);
/// ```
pub fn process_file(
    input_path: &Path,
    config: ParserConfig,
    output: &mut dyn Write,
) -> Result<ProcessSummary, ParseError> {
    let reader = LineReader::open(input_path)?;
    let mut stream = RecordStream::new(reader, config);

    let mut records = 0;
    for record in stream.by_ref() {
        let record = record?;
        writeln!(output, "{}", record)?;
        records += 1;
    }
    output.flush()?;

    let summary = ProcessSummary {
        records,
        lines: stream.lines_read(),
    };
    info!(
        path = %input_path.display(),
        records = summary.records,
        lines = summary.lines,
        "finished listing records"
    );

    Ok(summary)
}
