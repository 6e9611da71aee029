//! Record builders
//!
//! Turn one logical group (a leader row plus its continuation rows) into a
//! [`Record`]. Two strategies exist:
//!
//! - **generic**: bodies are concatenated; a body ending in `/` closes a field,
//!   a body without it wraps onto the next row and is joined with a space
//! - **account identifier**: bodies are tokenized, flattened into a single
//!   buffer of summary fields and cleaned of blank-token artifacts
//!
//! [`build_record`] picks the strategy from the leader's kind.

use crate::config::ParserConfig;
use crate::core::tokenize::{tokenize, SEPARATOR, TERMINATOR};
use crate::types::{ParseError, Record, RecordKind, Row};
use tracing::warn;

/// Fields per summary-code group: type code, amount, item count, funds type
pub const SUMMARY_GROUP_LEN: usize = 4;

/// Longest run of blank tokens a summary group can legitimately contain
const MAX_BLANK_RUN: usize = 2;

/// Build a record from one logical group
///
/// The group must be non-empty; its first row decides the builder.
///
/// # Errors
///
/// Propagates the account identifier builder's errors. The generic builder
/// cannot fail.
pub fn build_record(rows: Vec<Row>, config: &ParserConfig) -> Result<Record, ParseError> {
    let Some(kind) = rows.first().map(|row| row.kind) else {
        return Err(ParseError::EmptyInput);
    };

    match kind {
        RecordKind::AccountIdentifier => build_account_identifier_record(rows, config),
        RecordKind::FileHeader
        | RecordKind::GroupHeader
        | RecordKind::TransactionDetail
        | RecordKind::AccountTrailer
        | RecordKind::GroupTrailer
        | RecordKind::FileTrailer => Ok(build_generic_record(rows)),
        // Only a stream that opens with a continuation row gets here
        RecordKind::Continuation => Ok(build_generic_record(rows)),
    }
}

/// Build a record whose fields may wrap across rows
///
/// Each non-empty body ending with the terminator contributes its text and a
/// field break; a non-empty body without the terminator contributes its text
/// and a space, so a field wrapped across two rows comes back with a space at
/// the line break. Empty bodies contribute nothing.
pub fn build_generic_record(rows: Vec<Row>) -> Record {
    let mut joined = String::new();
    for row in &rows {
        if row.body.is_empty() {
            continue;
        }
        match row.body.strip_suffix(TERMINATOR) {
            Some(text) => {
                joined.push_str(text);
                joined.push(SEPARATOR);
            }
            None => {
                joined.push_str(&row.body);
                joined.push(' ');
            }
        }
    }

    // Drop the trailing separator; no-op when every body was empty
    joined.pop();

    let fields = joined.split(SEPARATOR).map(str::to_string).collect();
    let kind = rows.first().map_or(RecordKind::Continuation, |row| row.kind);
    Record::new(kind, fields, rows)
}

/// Build an account identifier record from an `03` row and its `88` rows
///
/// The leader carries the account id and currency followed by zero or more
/// summary groups; continuation rows carry summary groups only. The result is
/// `[account_id, currency, <type code, amount, item count, funds type>*]`.
///
/// # Errors
///
/// * `IncompleteAccountIdentifier` if the leader has no currency field
/// * `MalformedAccountGroup` if the cleaned summary fields are not a multiple
///   of 4 and `config.reject_partial_summary_groups` is set
pub fn build_account_identifier_record(
    rows: Vec<Row>,
    config: &ParserConfig,
) -> Result<Record, ParseError> {
    let Some((leader, continuations)) = rows.split_first() else {
        return Err(ParseError::EmptyInput);
    };
    let kind = leader.kind;

    let mut tokens = tokenize(&leader.body).into_iter();
    let account = tokens.next().unwrap_or_default();
    let currency = tokens
        .next()
        .ok_or_else(|| ParseError::incomplete_account_identifier(&leader.body))?;

    let mut buffer: Vec<String> = tokens.collect();
    for row in continuations {
        buffer.extend(tokenize(&row.body));
    }

    let summary = clamp_blank_runs(buffer);
    if summary.len() % SUMMARY_GROUP_LEN != 0 {
        if config.reject_partial_summary_groups {
            return Err(ParseError::malformed_account_group(&account, summary.len()));
        }
        warn!(
            account = %account,
            fields = summary.len(),
            "summary fields do not form complete 4-field groups"
        );
    }

    let mut fields = Vec::with_capacity(summary.len() + 2);
    fields.push(account);
    fields.push(currency);
    fields.extend(summary);

    Ok(Record::new(kind, fields, rows))
}

/// Truncate every run of blank tokens to at most two
///
/// Runs of non-empty tokens are kept whole: a repeated amount or type code is
/// data. Only the last two fields of a summary group may be blank, so longer
/// blank runs come from trailing separators.
fn clamp_blank_runs(buffer: Vec<String>) -> Vec<String> {
    let mut cleaned = Vec::with_capacity(buffer.len());
    let mut blank_run = 0;

    for token in buffer {
        if token.is_empty() {
            blank_run += 1;
            if blank_run > MAX_BLANK_RUN {
                continue;
            }
        } else {
            blank_run = 0;
        }
        cleaned.push(token);
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rows(group: &[(RecordKind, &str)]) -> Vec<Row> {
        group.iter().map(|(kind, body)| Row::new(*kind, *body)).collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    #[case::single_terminated(
        &[(RecordKind::FileHeader, "HEADERTEXT/")],
        &["HEADERTEXT"]
    )]
    #[case::wrapped_field(
        &[(RecordKind::GroupHeader, "PARTA"), (RecordKind::Continuation, "PARTB/")],
        &["PARTA PARTB"]
    )]
    #[case::continuation_adds_fields(
        &[
            (RecordKind::TransactionDetail, "165,1000,0,,REF1/"),
            (RecordKind::Continuation, "PAYMENT FROM ACME/"),
        ],
        &["165", "1000", "0", "", "REF1", "PAYMENT FROM ACME"]
    )]
    #[case::unterminated_last_row(
        &[(RecordKind::TransactionDetail, "A,B")],
        &["A", "B"]
    )]
    #[case::empty_continuation_skipped(
        &[(RecordKind::AccountTrailer, "1000,3/"), (RecordKind::Continuation, "")],
        &["1000", "3"]
    )]
    #[case::all_bodies_empty(
        &[(RecordKind::FileTrailer, ""), (RecordKind::Continuation, "")],
        &[""]
    )]
    fn test_generic_record(#[case] group: &[(RecordKind, &str)], #[case] expected: &[&str]) {
        let record = build_generic_record(rows(group));
        assert_eq!(record.kind(), group[0].0);
        assert_eq!(record.fields(), strings(expected).as_slice());
        assert_eq!(record.rows().len(), group.len());
    }

    #[rstest]
    #[case(&[(RecordKind::FileHeader, "A,B,,C/"), (RecordKind::Continuation, "D E")])]
    #[case(&[(RecordKind::GroupTrailer, "X"), (RecordKind::Continuation, "Y,Z/")])]
    #[case(&[(RecordKind::FileTrailer, ",,/")])]
    fn test_generic_fields_survive_rejoin(#[case] group: &[(RecordKind, &str)]) {
        let record = build_generic_record(rows(group));
        let rejoined = record.fields().join(",");
        let resplit: Vec<String> = rejoined.split(',').map(str::to_string).collect();
        assert_eq!(resplit, record.fields());
    }

    #[rstest]
    #[case::complete_group(
        &[(RecordKind::AccountIdentifier, "ACC1,USD,100,500,,/")],
        &["ACC1", "USD", "100", "500", "", ""]
    )]
    #[case::blank_run_clamped(
        &[(RecordKind::AccountIdentifier, "ACC1,USD,100,500,,,,/")],
        &["ACC1", "USD", "100", "500", "", ""]
    )]
    #[case::no_summary_groups(
        &[(RecordKind::AccountIdentifier, "ACC1,USD/")],
        &["ACC1", "USD"]
    )]
    #[case::continuation_groups(
        &[
            (RecordKind::AccountIdentifier, "ACC1,USD,010,500,,/"),
            (RecordKind::Continuation, "015,700,,/"),
            (RecordKind::Continuation, "100,2500,3,0/"),
        ],
        &["ACC1", "USD", "010", "500", "", "", "015", "700", "", "", "100", "2500", "3", "0"]
    )]
    #[case::repeated_values_kept(
        &[(RecordKind::AccountIdentifier, "ACC1,USD,400,400,400,400/")],
        &["ACC1", "USD", "400", "400", "400", "400"]
    )]
    #[case::single_blank_kept(
        &[(RecordKind::AccountIdentifier, "ACC1,USD,100,500,,2/")],
        &["ACC1", "USD", "100", "500", "", "2"]
    )]
    #[case::blank_currency(
        &[(RecordKind::AccountIdentifier, "ACC1,,010,500,,/")],
        &["ACC1", "", "010", "500", "", ""]
    )]
    fn test_account_identifier_record(
        #[case] group: &[(RecordKind, &str)],
        #[case] expected: &[&str],
    ) {
        let record = build_account_identifier_record(rows(group), &ParserConfig::strict()).unwrap();
        assert_eq!(record.kind(), RecordKind::AccountIdentifier);
        assert_eq!(record.fields(), strings(expected).as_slice());
        assert_eq!(record.rows().len(), group.len());
    }

    #[rstest]
    #[case::run_of_five(&["100", "", "", "", "", ""], &["100", "", ""])]
    #[case::run_of_one(&["100", "", "7"], &["100", "", "7"])]
    #[case::run_of_two(&["", ""], &["", ""])]
    #[case::separate_runs(&["", "", "", "A", "", "", ""], &["", "", "A", "", ""])]
    #[case::non_empty_repeats(&["9", "9", "9", "9", "9"], &["9", "9", "9", "9", "9"])]
    #[case::empty_buffer(&[], &[])]
    fn test_clamp_blank_runs(#[case] buffer: &[&str], #[case] expected: &[&str]) {
        assert_eq!(clamp_blank_runs(strings(buffer)), strings(expected));
    }

    #[test]
    fn test_partial_group_passes_when_lenient() {
        let group = rows(&[(RecordKind::AccountIdentifier, "ACC1,USD,010,500,1/")]);
        let record = build_account_identifier_record(group, &ParserConfig::lenient()).unwrap();
        assert_eq!(record.fields(), strings(&["ACC1", "USD", "010", "500", "1"]).as_slice());
    }

    #[test]
    fn test_partial_group_rejected_when_strict() {
        let group = rows(&[(RecordKind::AccountIdentifier, "ACC1,USD,010,500,1/")]);
        let result = build_account_identifier_record(group, &ParserConfig::strict());
        assert_eq!(result, Err(ParseError::malformed_account_group("ACC1", 3)));
    }

    #[test]
    fn test_missing_currency_is_rejected() {
        let group = rows(&[(RecordKind::AccountIdentifier, "ACC1/")]);
        let result = build_account_identifier_record(group, &ParserConfig::lenient());
        assert_eq!(result, Err(ParseError::incomplete_account_identifier("ACC1/")));
    }

    #[rstest]
    #[case::account(RecordKind::AccountIdentifier, "ACC1,USD,100,500,,/", 6)]
    #[case::header(RecordKind::FileHeader, "ACC1,USD,100,500,,/", 6)]
    #[case::trailer(RecordKind::AccountTrailer, "5000,4/", 2)]
    #[case::continuation_leader(RecordKind::Continuation, "A,B/", 2)]
    fn test_build_record_dispatch(
        #[case] kind: RecordKind,
        #[case] body: &str,
        #[case] field_count: usize,
    ) {
        let record = build_record(vec![Row::new(kind, body)], &ParserConfig::lenient()).unwrap();
        assert_eq!(record.kind(), kind);
        assert_eq!(record.fields().len(), field_count);
    }

    #[test]
    fn test_account_dispatch_clamps_where_generic_does_not() {
        let body = "ACC1,USD,100,500,,,,/";
        let account = build_record(
            vec![Row::new(RecordKind::AccountIdentifier, body)],
            &ParserConfig::lenient(),
        )
        .unwrap();
        let generic = build_record(
            vec![Row::new(RecordKind::FileHeader, body)],
            &ParserConfig::lenient(),
        )
        .unwrap();
        assert_eq!(account.fields().len(), 6);
        assert_eq!(generic.fields().len(), 8);
    }

    #[test]
    fn test_build_record_rejects_empty_group() {
        let result = build_record(Vec::new(), &ParserConfig::lenient());
        assert_eq!(result, Err(ParseError::EmptyInput));
    }
}
