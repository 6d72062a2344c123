use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for template rendering.
#[derive(Error, Debug)]
pub enum TemplaterError {
    /// A mapping argument is not of the form `<char>:<name>:<value>`.
    #[error("Malformed mapping '{arg}': {reason}")]
    MalformedMapping { arg: String, reason: String },

    /// The template references a key no mapping defines.
    #[error("Undefined placeholder '^{key}' at character {offset}")]
    UndefinedPlaceholder { key: char, offset: usize },

    /// Writing rendered output failed.
    #[error("Failed to write rendered output: {0}")]
    Write(#[from] std::io::Error),
}
