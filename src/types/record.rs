//! Assembled logical records
//!
//! A [`Record`] is produced once per logical group (a leader row plus its
//! continuation rows) and never changes afterwards.

use super::record_kind::RecordKind;
use super::row::Row;
use std::fmt;

/// One logical record
///
/// Holds the kind of the group leader, the reconstructed field list and the
/// source rows the record was built from, kept for traceability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: RecordKind,
    fields: Vec<String>,
    rows: Vec<Row>,
}

impl Record {
    /// Create a record from its parts
    pub fn new(kind: RecordKind, fields: Vec<String>, rows: Vec<Row>) -> Self {
        Record { kind, fields, rows }
    }

    /// Kind of the group leader
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Reconstructed fields, in order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `index`, if present
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Source rows: the leader followed by its continuations
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consume the record, returning kind, fields and rows
    pub fn into_parts(self) -> (RecordKind, Vec<String>, Vec<Row>) {
        (self.kind, self.fields, self.rows)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.fields.join("|"))
    }
}
