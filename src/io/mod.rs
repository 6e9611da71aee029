//! I/O module
//!
//! Supplies physical lines to the record stream.
//!
//! # Components
//!
//! - `line_reader` - Line-by-line reader over files or any `BufRead`

pub mod line_reader;

pub use line_reader::LineReader;
