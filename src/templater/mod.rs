// error module
mod error;
// placeholder module
mod placeholder;

// substitute module
pub mod substitute;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::TemplaterError;
pub use placeholder::{Placeholder, PlaceholderMap, MAPPING_SEPARATOR};
pub use substitute::{
    provenance_line, render, substitute, ScanState, SubstitutionSummary, PLACEHOLDER_MARKER,
};
