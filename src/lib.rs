//! BAI2 Record Assembly Library
//! # Overview
//!
//! This library turns the physical lines of a BAI2 cash-management statement
//! file into a lazy stream of logical records. Records whose content wraps
//! onto `88` continuation lines are recombined into a single record with
//! correctly reconstructed fields.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (RecordKind, Row, Record, ParseError)
//! - [`core`] - Record assembly:
//!   - [`core::tokenize`] - Body tokenizer
//!   - [`core::builder`] - Generic and account identifier record builders
//!   - [`core::stream`] - Lazy grouping of rows into records
//!   - [`core::cursor`] - Current-record cursor
//! - [`io`] - Physical line source
//! - [`config`] - Strictness switches
//! - [`pipeline`] - File-to-listing orchestration used by the binary
//! - [`cli`] - CLI arguments parsing
//!
//! # Record Layout
//!
//! Each line is `CC,BODY`, where `CC` is a two-character record code. A body
//! ending in `/` is complete; a body without it continues on the next `88`
//! line. Account identifier (`03`) records carry
//! `account, currency, <type code, amount, item count, funds type>*`.
//!
//! ```
//! use bai2_records::{RecordCursor, RecordKind, RecordStream};
//!
//! let lines = ["01,BANK,CUST/", "03,ACC1,USD,010,500,,/", "88,015,700,,/"];
//! let mut cursor = RecordCursor::new(RecordStream::from_lines(lines)).unwrap();
//! assert_eq!(cursor.current().kind(), RecordKind::FileHeader);
//!
//! let account = cursor.advance().unwrap();
//! assert_eq!(account.fields().len(), 10);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use config::ParserConfig;
pub use self::core::{RecordCursor, RecordStream};
pub use io::LineReader;
pub use types::{ParseError, Record, RecordKind, Row};
