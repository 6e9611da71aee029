//! Physical line reader
//!
//! Feeds the record stream with one `String` per physical line. Line
//! terminators (`\n` or `\r\n`) are removed; nothing else is trimmed, so a
//! body's trailing `/` terminator stays where the file put it.
//!
//! ```no_run
//! use bai2_records::config::ParserConfig;
//! use bai2_records::core::RecordStream;
//! use bai2_records::io::LineReader;
//! use std::path::Path;
//!
//! let reader = LineReader::open(Path::new("statement.bai")).unwrap();
//! for record in RecordStream::new(reader, ParserConfig::default()) {
//!     match record {
//!         Ok(record) => println!("{}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::types::ParseError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::Path;

/// Line-by-line reader over any buffered source
#[derive(Debug)]
pub struct LineReader<R> {
    lines: Lines<R>,
}

impl LineReader<BufReader<File>> {
    /// Open a file for line-by-line reading
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `Io` for any other open failure
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ParseError::file_not_found(&path.display().to_string()),
            _ => ParseError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::new(BufReader::with_capacity(8 * 1024, file)))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map_err(ParseError::from).map(|mut line| {
            // lines() strips "\n" but leaves the "\r" of a CRLF ending
            if line.ends_with('\r') {
                line.pop();
            }
            line
        }))
    }
}
