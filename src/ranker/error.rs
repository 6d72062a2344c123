use std::num::ParseFloatError;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for results-log ranking.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankerError {
    /// The trailing field of a stats line is not a number.
    #[error("Malformed stats line {line_number}: score field '{field}' is not a number ({source})")]
    MalformedStats {
        line_number: usize,
        field: String,
        #[source]
        source: ParseFloatError,
    },
}
