use std::io::Write;

use super::error::TemplaterError;
use super::placeholder::PlaceholderMap;

//─────────────────────────────────────────────────────────────────────────────

/// Character that introduces a substitution. There is no escape for it.
pub const PLACEHOLDER_MARKER: char = '^';

/// Scan mode while walking a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Characters are copied through.
    Normal,
    /// The previous character was the marker; the next one is a key.
    PendingSubstitution,
}

/// What a successful render did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionSummary {
    pub substitutions: usize,
    pub bytes_written: usize,
}

/// Streams `template` into `writer`, replacing every `^<key>` with the value
/// mapped to `<key>`.
///
/// Output is written as the scan goes, so on error the writer holds
/// everything up to the failing placeholder. A marker at the very end of the
/// template has no key and is dropped.
pub fn substitute<W: Write>(
    template: &str,
    placeholders: &PlaceholderMap,
    writer: &mut W,
) -> Result<SubstitutionSummary, TemplaterError> {
    let mut state = ScanState::Normal;
    let mut summary = SubstitutionSummary::default();
    let mut utf8_buf = [0u8; 4];

    for (offset, c) in template.chars().enumerate() {
        match state {
            ScanState::Normal if c == PLACEHOLDER_MARKER => {
                state = ScanState::PendingSubstitution;
            }
            ScanState::Normal => {
                let encoded = c.encode_utf8(&mut utf8_buf);
                writer.write_all(encoded.as_bytes())?;
                summary.bytes_written += encoded.len();
            }
            ScanState::PendingSubstitution => {
                let placeholder = placeholders
                    .lookup(c)
                    .ok_or(TemplaterError::UndefinedPlaceholder { key: c, offset })?;
                writer.write_all(placeholder.value.as_bytes())?;
                summary.bytes_written += placeholder.value.len();
                summary.substitutions += 1;
                state = ScanState::Normal;
            }
        }
    }

    Ok(summary)
}

/// Renders into a `String`; convenience over [`substitute`].
pub fn render(template: &str, placeholders: &PlaceholderMap) -> Result<String, TemplaterError> {
    let mut buf = Vec::with_capacity(template.len());
    substitute(template, placeholders, &mut buf)?;
    // Only UTF-8 input and values ever reach the buffer.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `Command: ` followed by the invocation joined with single spaces.
pub fn provenance_line<S: AsRef<str>>(invocation: &[S]) -> String {
    let joined = invocation
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    format!("Command: {}\n", joined)
}
