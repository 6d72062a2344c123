// error module
mod error;
// format module
mod format;

// parser module
pub mod parser;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::RankerError;
pub use format::{format_entry, py_repr};
pub use parser::{parse_log, rank, ranking_key, LogEntry, RankedEntry, DEFAULT_TOP};
