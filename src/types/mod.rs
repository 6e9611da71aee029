//! Types module
//!
//! Contains core data structures used throughout the parser.
//! This module organizes types into logical submodules:
//! - `record_kind`: Two-character record codes
//! - `row`: Classified physical lines
//! - `record`: Assembled logical records
//! - `error`: Error types for the parser

pub mod error;
pub mod record;
pub mod record_kind;
pub mod row;

pub use error::ParseError;
pub use record::Record;
pub use record_kind::RecordKind;
pub use row::Row;
