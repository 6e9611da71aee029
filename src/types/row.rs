//! Classified physical lines
//!
//! A [`Row`] is one physical line split into its record kind and body. The
//! line layout is `CC?BODY`: a two-character record code, one separator
//! character (normally `,`) that is discarded, and the body.

use super::error::ParseError;
use super::record_kind::RecordKind;

/// Minimum number of characters in a classifiable line: code plus separator
const MIN_LINE_CHARS: usize = 3;

/// One classified physical line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Kind taken from the two-character prefix
    pub kind: RecordKind,

    /// Everything after the code and the separator character
    pub body: String,
}

impl Row {
    /// Create a row from an already classified kind and body
    pub fn new(kind: RecordKind, body: impl Into<String>) -> Self {
        Row {
            kind,
            body: body.into(),
        }
    }

    /// Classify one physical line
    ///
    /// # Arguments
    ///
    /// * `line` - The physical line, without its line terminator
    /// * `line_number` - 1-based position of the line, used for error context
    ///
    /// # Errors
    ///
    /// * `LineTooShort` if the line has fewer than 3 characters
    /// * `UnknownRecordKind` if the first two characters are not a known code
    pub fn parse(line: &str, line_number: usize) -> Result<Self, ParseError> {
        let length = line.chars().count();
        if length < MIN_LINE_CHARS {
            return Err(ParseError::line_too_short(line_number, length));
        }

        let code: String = line.chars().take(2).collect();
        let kind = RecordKind::from_code(&code)
            .ok_or_else(|| ParseError::unknown_record_kind(&code, Some(line_number)))?;

        // Known codes are ASCII, so byte 2 starts the separator character
        let mut rest = line[2..].chars();
        rest.next();

        Ok(Row::new(kind, rest.as_str()))
    }
}
