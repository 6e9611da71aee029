//! Record stream with one-row lookahead
//!
//! Consumes physical lines lazily, classifies each into a [`Row`], partitions
//! the rows into logical groups and yields one [`Record`] per group.
//!
//! # Grouping
//!
//! ```text
//! 01 ........   -> group 1
//! 02 ........   -> group 2
//! 03 ........   -> group 3 (leader)
//! 88 ........   -> group 3 (continuation)
//! 16 ........   -> group 4
//! ```
//!
//! A group is closed only when the next non-continuation row arrives or the
//! input ends, so the stream never buffers more than one row past the group
//! it is about to emit. The last group is flushed at end of input without
//! needing a trailing sentinel row.
//!
//! # Error Handling
//!
//! Classification and build errors are yielded in place of a record. After
//! an error the stream is finished: the group that was being accumulated is
//! dropped because its extent can no longer be determined.

use crate::config::ParserConfig;
use crate::core::builder::build_record;
use crate::types::{ParseError, Record, Row};
use std::iter::{FusedIterator, Map};
use tracing::{debug, warn};

/// Line source built from an infallible iterator of lines
pub type InfallibleLines<I, S> = Map<I, fn(S) -> Result<S, ParseError>>;

/// Grouping state between pulls
#[derive(Debug)]
enum GroupState {
    /// Nothing read yet
    Start,
    /// A leader and its continuations seen so far
    Accumulating(Vec<Row>),
    /// Input exhausted or an error was yielded
    Done,
}

/// Lazy iterator of logical records
///
/// Yields `Result<Record, ParseError>` in input order, one item per logical
/// group. The stream is finite and cannot be restarted.
///
/// # Examples
///
/// ```
/// use bai2_records::core::RecordStream;
///
/// let lines = ["03,ACC1,USD/", "88,010,500,,/", "16,TXN/"];
/// let records: Vec<_> = RecordStream::from_lines(lines)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(records.len(), 2);
/// ```
#[derive(Debug)]
pub struct RecordStream<I> {
    lines: I,
    line_num: usize,
    state: GroupState,
    config: ParserConfig,
}

impl<I, S> RecordStream<InfallibleLines<I, S>>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Create a lenient stream over plain lines
    pub fn from_lines<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I, Item = S>,
    {
        Self::from_lines_with_config(lines, ParserConfig::default())
    }

    /// Create a stream over plain lines with an explicit configuration
    pub fn from_lines_with_config<L>(lines: L, config: ParserConfig) -> Self
    where
        L: IntoIterator<IntoIter = I, Item = S>,
    {
        let source = lines
            .into_iter()
            .map(Ok as fn(S) -> Result<S, ParseError>);
        RecordStream::new(source, config)
    }
}

impl<I, S> RecordStream<I>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    /// Create a stream over a fallible line source
    ///
    /// Errors from the source (for example read failures) are yielded as-is
    /// and end the stream.
    pub fn new(lines: I, config: ParserConfig) -> Self {
        RecordStream {
            lines,
            line_num: 0,
            state: GroupState::Start,
            config,
        }
    }

    /// Number of physical lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_num
    }

    /// Pull and classify the next physical line
    fn next_row(&mut self) -> Option<Result<Row, ParseError>> {
        let line = self.lines.next()?;
        self.line_num += 1;
        Some(line.and_then(|line| Row::parse(line.as_ref(), self.line_num)))
    }

    /// Build a closed group, logging what was emitted
    fn emit(&self, group: Vec<Row>) -> Result<Record, ParseError> {
        let record = build_record(group, &self.config)?;
        debug!(
            kind = record.kind().name(),
            rows = record.rows().len(),
            fields = record.fields().len(),
            "record assembled"
        );
        Ok(record)
    }

    /// Seed the first group, applying the leading-continuation policy
    fn start(&mut self, row: Row) -> Result<(), ParseError> {
        if row.kind.is_continuation() {
            if self.config.reject_leading_continuation {
                return Err(ParseError::leading_continuation(self.line_num));
            }
            warn!(
                line = self.line_num,
                "input opens with a continuation row; using it as a record leader"
            );
        }
        self.state = GroupState::Accumulating(vec![row]);
        Ok(())
    }
}

impl<I, S> Iterator for RecordStream<I>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, GroupState::Done) {
                GroupState::Done => return None,
                GroupState::Start => match self.next_row() {
                    None => return None,
                    Some(Err(e)) => return Some(Err(e)),
                    Some(Ok(row)) => {
                        if let Err(e) = self.start(row) {
                            return Some(Err(e));
                        }
                    }
                },
                GroupState::Accumulating(mut group) => match self.next_row() {
                    None => return Some(self.emit(group)),
                    Some(Err(e)) => return Some(Err(e)),
                    Some(Ok(row)) if row.kind.is_continuation() => {
                        group.push(row);
                        self.state = GroupState::Accumulating(group);
                    }
                    Some(Ok(row)) => {
                        let record = self.emit(group);
                        self.state = match record {
                            Ok(_) => GroupState::Accumulating(vec![row]),
                            Err(_) => GroupState::Done,
                        };
                        return Some(record);
                    }
                },
            }
        }
    }
}

impl<I, S> FusedIterator for RecordStream<I>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
}
