//! Error types for the BAI2 record parser
//!
//! This module defines all error types that can occur while reading physical
//! lines and assembling them into logical records.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, read failures
//! - **Line Errors**: Lines too short to carry a record code, unknown record codes
//! - **Record Errors**: Account identifier records that cannot be flattened
//! - **Stream Errors**: Empty input, reading past the last record

use thiserror::Error;

/// Main error type for the record parser
///
/// Every variant is a local condition the caller can act on. Nothing in the
/// parser retries or substitutes a default record for a failed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Line is too short to hold a record code, separator and body
    #[error("Line {line} is too short ({length} characters): expected a two-character record code and a separator")]
    LineTooShort {
        /// Physical line number (1-based)
        line: usize,
        /// Length of the line in characters
        length: usize,
    },

    /// Two-character prefix does not match any known record kind
    ///
    /// Unknown rows are never skipped: treating one as a fresh leader would
    /// silently corrupt the grouping of everything after it.
    #[error("Unknown record code '{code}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    UnknownRecordKind {
        /// The unrecognized code
        code: String,
        /// Physical line number (if known)
        line: Option<usize>,
    },

    /// The first row of the input is a continuation row
    ///
    /// Only raised when the parser is configured to reject it.
    #[error("Line {line}: a continuation record cannot open the file")]
    LeadingContinuation {
        /// Physical line number (1-based)
        line: usize,
    },

    /// Account identifier record without a currency field
    #[error("Account identifier record '{body}' is missing the currency field")]
    IncompleteAccountIdentifier {
        /// Body of the leader row
        body: String,
    },

    /// Summary fields of an account identifier record do not form 4-field groups
    ///
    /// Only raised when the parser is configured to reject partial groups.
    #[error("Account {account}: {fields} summary fields do not form complete 4-field groups")]
    MalformedAccountGroup {
        /// Account identifier of the offending record
        account: String,
        /// Number of summary fields after cleanup
        fields: usize,
    },

    /// Input contained no rows at all
    #[error("Input contains no records")]
    EmptyInput,

    /// No further records are available
    #[error("End of record stream reached")]
    EndOfStream,
}

// Conversion from io::Error to ParseError
impl From<std::io::Error> for ParseError {
    fn from(error: std::io::Error) -> Self {
        ParseError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ParseError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        ParseError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a LineTooShort error
    pub fn line_too_short(line: usize, length: usize) -> Self {
        ParseError::LineTooShort { line, length }
    }

    /// Create an UnknownRecordKind error
    pub fn unknown_record_kind(code: &str, line: Option<usize>) -> Self {
        ParseError::UnknownRecordKind {
            code: code.to_string(),
            line,
        }
    }

    /// Create a LeadingContinuation error
    pub fn leading_continuation(line: usize) -> Self {
        ParseError::LeadingContinuation { line }
    }

    /// Create an IncompleteAccountIdentifier error
    pub fn incomplete_account_identifier(body: &str) -> Self {
        ParseError::IncompleteAccountIdentifier {
            body: body.to_string(),
        }
    }

    /// Create a MalformedAccountGroup error
    pub fn malformed_account_group(account: &str, fields: usize) -> Self {
        ParseError::MalformedAccountGroup {
            account: account.to_string(),
            fields,
        }
    }
}
