//! Body tokenizer
//!
//! Splits a row body into comma-separated tokens after removing a single
//! trailing `/` terminator. Empty tokens are kept: `"A,,B,/"` yields
//! `["A", "", "B", ""]`.

/// Character marking the end of meaningful content on a physical line
pub const TERMINATOR: char = '/';

/// Field separator inside a body
pub const SEPARATOR: char = ',';

/// Strip at most one trailing terminator from `body`
pub fn strip_terminator(body: &str) -> &str {
    body.strip_suffix(TERMINATOR).unwrap_or(body)
}

/// Split a body into tokens, keeping empty ones
pub fn tokenize(body: &str) -> Vec<String> {
    strip_terminator(body)
        .split(SEPARATOR)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::terminated("ACC1,USD,100/", vec!["ACC1", "USD", "100"])]
    #[case::unterminated("ACC1,USD", vec!["ACC1", "USD"])]
    #[case::trailing_comma("100,500,,/", vec!["100", "500", "", ""])]
    #[case::consecutive_commas("A,,,B", vec!["A", "", "", "B"])]
    #[case::only_terminator("/", vec![""])]
    #[case::empty("", vec![""])]
    #[case::strips_one_terminator_only("A//", vec!["A/"])]
    #[case::inner_slash_kept("A/B,C/", vec!["A/B", "C"])]
    fn test_tokenize(#[case] body: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokenize(body), expected);
    }

    #[rstest]
    #[case("ACC1,USD,100,500,,/")]
    #[case("A,,,B")]
    #[case("A/B,C/")]
    #[case(",")]
    fn test_retokenizing_joined_tokens_is_stable(#[case] body: &str) {
        let tokens = tokenize(body);
        let rejoined = tokens.join(",");
        assert_eq!(tokenize(&rejoined), tokens);
    }
}
