//! Pull cursor over a record stream
//!
//! [`RecordCursor`] keeps a "current record" slot for consumers that walk the
//! file hierarchy one step at a time (file header, group header, account,
//! transactions, trailers) and need to look at a record before deciding
//! whether to consume it.

use crate::core::stream::RecordStream;
use crate::types::{ParseError, Record};

/// Current-record cursor
///
/// The first record is pulled on construction, so a cursor always has a
/// current record.
#[derive(Debug)]
pub struct RecordCursor<I> {
    stream: RecordStream<I>,
    current: Record,
}

impl<I, S> RecordCursor<I>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    /// Create a cursor positioned on the first record
    ///
    /// # Errors
    ///
    /// * `EmptyInput` if the stream yields no records
    /// * Any error the stream yields for its first record
    pub fn new(mut stream: RecordStream<I>) -> Result<Self, ParseError> {
        let current = stream.next().ok_or(ParseError::EmptyInput)??;
        Ok(RecordCursor { stream, current })
    }

    /// The record the cursor is positioned on
    pub fn current(&self) -> &Record {
        &self.current
    }

    /// Move to the next record and return it
    ///
    /// On failure the cursor stays on its previous record.
    ///
    /// # Errors
    ///
    /// * `EndOfStream` once every record has been consumed
    /// * Any error the stream yields for the next record
    pub fn advance(&mut self) -> Result<&Record, ParseError> {
        let next = self.stream.next().ok_or(ParseError::EndOfStream)??;
        self.current = next;
        Ok(&self.current)
    }

    /// Consume the cursor, returning the current record
    pub fn into_current(self) -> Record {
        self.current
    }
}
