//! Parser configuration
//!
//! Controls how strictly the parser treats input that the record layout
//! tolerates but that is probably wrong.

/// Strictness switches for record assembly
///
/// The default is lenient: both conditions are accepted and logged as
/// warnings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Fail account identifier records whose summary fields do not form
    /// complete 4-field groups
    pub reject_partial_summary_groups: bool,
    /// Fail a stream whose first row is a continuation row instead of using
    /// that row as a group leader
    pub reject_leading_continuation: bool,
}

impl ParserConfig {
    /// Accept partial summary groups and leading continuation rows
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Reject partial summary groups and leading continuation rows
    pub fn strict() -> Self {
        Self {
            reject_partial_summary_groups: true,
            reject_leading_continuation: true,
        }
    }
}
