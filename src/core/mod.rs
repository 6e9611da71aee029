//! Record assembly module
//!
//! This module contains the record assembly components:
//! - `tokenize` - Body tokenizer shared by the builders
//! - `builder` - Generic and account identifier record builders
//! - `stream` - Lazy grouping of rows into records
//! - `cursor` - Current-record cursor over a stream

pub mod builder;
pub mod cursor;
pub mod stream;
pub mod tokenize;

pub use builder::{build_account_identifier_record, build_generic_record, build_record};
pub use cursor::RecordCursor;
pub use stream::RecordStream;
pub use tokenize::tokenize;
