use std::num::ParseFloatError;

use super::error::RankerError;

//─────────────────────────────────────────────────────────────────────────────

/// Prefix of a line that names the command an experiment ran with.
pub const COMMAND_PREFIX: &str = "Command:";
/// Prefix of a line holding the comma-separated statistics of one run.
pub const STATS_PREFIX: &str = "stats:";
/// Separator between the fields of a stats line.
pub const FIELD_SEPARATOR: &str = ", ";
/// How many entries are printed when no limit is given.
pub const DEFAULT_TOP: usize = 5;

/// A stats line paired with the command that was active when it was logged.
///
/// Both strings are kept verbatim, trailing newline included.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub command: Option<String>,
    pub stats_line: String,
}

/// A [`LogEntry`] together with its parsed ranking key.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub entry: LogEntry,
    pub score: f64,
}

/// Extracts the ranking key of a stats line: the last `", "`-separated field
/// of the trimmed line, parsed as a float. Digit-group underscores such as
/// `1_000.5` are accepted.
pub fn ranking_key(stats_line: &str) -> Result<f64, ParseFloatError> {
    let field = score_field(stats_line).trim();
    if field.contains('_') {
        if let Some(digits) = strip_digit_separators(field) {
            return digits.parse::<f64>();
        }
    }
    field.parse::<f64>()
}

/// Removes underscores that sit between two ASCII digits. Returns `None` if
/// any underscore is misplaced, leaving the field to fail parsing as-is.
fn strip_digit_separators(field: &str) -> Option<String> {
    let bytes = field.as_bytes();
    let mut out = String::with_capacity(field.len());
    for (i, c) in field.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

fn score_field(stats_line: &str) -> &str {
    // rsplit always yields at least one item.
    stats_line
        .trim()
        .rsplit(FIELD_SEPARATOR)
        .next()
        .unwrap_or_default()
}

/// Scans a results log in a single forward pass.
///
/// Every `stats:` line becomes an entry attached to the most recent
/// `Command:` line above it. A stats line whose score does not parse aborts
/// the whole scan.
pub fn parse_log(text: &str) -> Result<Vec<RankedEntry>, RankerError> {
    let mut current_command: Option<&str> = None;
    let mut entries = Vec::new();

    for (index, line) in text.split_inclusive('\n').enumerate() {
        if line.starts_with(COMMAND_PREFIX) {
            current_command = Some(line);
        } else if line.starts_with(STATS_PREFIX) {
            let score = ranking_key(line).map_err(|source| RankerError::MalformedStats {
                line_number: index + 1,
                field: score_field(line).to_string(),
                source,
            })?;
            entries.push(RankedEntry {
                entry: LogEntry {
                    command: current_command.map(str::to_string),
                    stats_line: line.to_string(),
                },
                score,
            });
        }
    }

    Ok(entries)
}

/// Orders entries by descending score and keeps the first `limit`.
///
/// The sort is stable, so runs with equal scores stay in log order.
pub fn rank(mut entries: Vec<RankedEntry>, limit: usize) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries.truncate(limit);
    entries
}
