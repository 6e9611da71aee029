//! Record kind codes for BAI2 statement files
//!
//! Every physical line of a BAI2 file starts with a two-character type code
//! that classifies the line's role. This module maps those codes to the closed
//! [`RecordKind`] enumeration used by the rest of the parser.

use super::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Two-character record type codes
///
/// Exactly one variant, [`RecordKind::Continuation`], never leads a logical
/// group: continuation rows extend whatever record precedes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `01` - file header
    FileHeader,

    /// `02` - group header
    GroupHeader,

    /// `03` - account identifier and summary status
    ///
    /// Carries the account number, currency and a series of 4-field summary
    /// groups. The summary groups may continue on `88` rows.
    AccountIdentifier,

    /// `16` - transaction detail
    TransactionDetail,

    /// `49` - account trailer
    AccountTrailer,

    /// `98` - group trailer
    GroupTrailer,

    /// `99` - file trailer
    FileTrailer,

    /// `88` - continuation of the preceding record
    Continuation,
}

impl RecordKind {
    /// All kinds, in file order with the continuation kind last
    pub const ALL: [RecordKind; 8] = [
        RecordKind::FileHeader,
        RecordKind::GroupHeader,
        RecordKind::AccountIdentifier,
        RecordKind::TransactionDetail,
        RecordKind::AccountTrailer,
        RecordKind::GroupTrailer,
        RecordKind::FileTrailer,
        RecordKind::Continuation,
    ];

    /// Look up a kind by its two-character code
    ///
    /// Returns `None` for anything that is not one of the eight known codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(RecordKind::FileHeader),
            "02" => Some(RecordKind::GroupHeader),
            "03" => Some(RecordKind::AccountIdentifier),
            "16" => Some(RecordKind::TransactionDetail),
            "49" => Some(RecordKind::AccountTrailer),
            "98" => Some(RecordKind::GroupTrailer),
            "99" => Some(RecordKind::FileTrailer),
            "88" => Some(RecordKind::Continuation),
            _ => None,
        }
    }

    /// The two-character code as it appears in the file
    pub fn code(self) -> &'static str {
        match self {
            RecordKind::FileHeader => "01",
            RecordKind::GroupHeader => "02",
            RecordKind::AccountIdentifier => "03",
            RecordKind::TransactionDetail => "16",
            RecordKind::AccountTrailer => "49",
            RecordKind::GroupTrailer => "98",
            RecordKind::FileTrailer => "99",
            RecordKind::Continuation => "88",
        }
    }

    /// Human-readable name used in listings and log output
    pub fn name(self) -> &'static str {
        match self {
            RecordKind::FileHeader => "file_header",
            RecordKind::GroupHeader => "group_header",
            RecordKind::AccountIdentifier => "account_identifier",
            RecordKind::TransactionDetail => "transaction_detail",
            RecordKind::AccountTrailer => "account_trailer",
            RecordKind::GroupTrailer => "group_trailer",
            RecordKind::FileTrailer => "file_trailer",
            RecordKind::Continuation => "continuation",
        }
    }

    /// Whether rows of this kind extend the preceding record
    pub fn is_continuation(self) -> bool {
        matches!(self, RecordKind::Continuation)
    }
}

impl FromStr for RecordKind {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        RecordKind::from_code(code).ok_or_else(|| ParseError::unknown_record_kind(code, None))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_header("01", RecordKind::FileHeader)]
    #[case::group_header("02", RecordKind::GroupHeader)]
    #[case::account_identifier("03", RecordKind::AccountIdentifier)]
    #[case::transaction_detail("16", RecordKind::TransactionDetail)]
    #[case::account_trailer("49", RecordKind::AccountTrailer)]
    #[case::group_trailer("98", RecordKind::GroupTrailer)]
    #[case::file_trailer("99", RecordKind::FileTrailer)]
    #[case::continuation("88", RecordKind::Continuation)]
    fn test_from_code(#[case] code: &str, #[case] expected: RecordKind) {
        assert_eq!(RecordKind::from_code(code), Some(expected));
        assert_eq!(expected.code(), code);
    }

    #[rstest]
    #[case::unused_code("17")]
    #[case::single_char("0")]
    #[case::padded(" 1")]
    #[case::three_chars("016")]
    #[case::empty("")]
    fn test_from_str_rejects_unknown(#[case] code: &str) {
        let result = code.parse::<RecordKind>();
        assert_eq!(result, Err(ParseError::unknown_record_kind(code, None)));
    }

    #[test]
    fn test_only_continuation_is_continuation() {
        let continuations: Vec<_> = RecordKind::ALL
            .iter()
            .filter(|kind| kind.is_continuation())
            .collect();
        assert_eq!(continuations, vec![&RecordKind::Continuation]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RecordKind::AccountIdentifier.to_string(),
            "03 account_identifier"
        );
    }
}
