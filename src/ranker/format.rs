use super::parser::LogEntry;

/// Renders an entry as a Python tuple literal, e.g.
/// `('Command: ./run\n', 'stats: a, 1\n')`. A missing command prints as `None`.
pub fn format_entry(entry: &LogEntry) -> String {
    let command = entry
        .command
        .as_deref()
        .map_or_else(|| "None".to_string(), py_repr);
    format!("({}, {})", command, py_repr(&entry.stats_line))
}

/// Quotes a string the way Python's `repr` does.
pub fn py_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&escape_code_point(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Code points outside the control range that Python's `str.isprintable`
/// rejects: format characters, line/paragraph separators, private use and
/// non-characters. Spaces other than U+0020 are caught by `is_whitespace`.
const NON_PRINTABLE_RANGES: &[(u32, u32)] = &[
    (0x00ad, 0x00ad),
    (0x0600, 0x0605),
    (0x061c, 0x061c),
    (0x06dd, 0x06dd),
    (0x070f, 0x070f),
    (0x0890, 0x0891),
    (0x08e2, 0x08e2),
    (0x180e, 0x180e),
    (0x200b, 0x200f),
    (0x2028, 0x202e),
    (0x2060, 0x2064),
    (0x2066, 0x206f),
    (0xd800, 0xf8ff),
    (0xfdd0, 0xfdef),
    (0xfeff, 0xfeff),
    (0xfff9, 0xfffb),
    (0xfffe, 0xffff),
    (0x110bd, 0x110bd),
    (0x110cd, 0x110cd),
    (0x13430, 0x1343f),
    (0x1bca0, 0x1bca3),
    (0x1d173, 0x1d17a),
    (0xe0001, 0xe0001),
    (0xe0020, 0xe007f),
    (0xf0000, 0x10ffff),
];

/// Python's printability rule for `repr`, minus unassigned code points.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let code = c as u32;
    !NON_PRINTABLE_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

fn escape_code_point(c: char) -> String {
    let code = c as u32;
    match code {
        0..=0xff => format!("\\x{:02x}", code),
        0x100..=0xffff => format!("\\u{:04x}", code),
        _ => format!("\\U{:08x}", code),
    }
}
