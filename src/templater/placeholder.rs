use std::collections::HashMap;

use super::error::TemplaterError;

//─────────────────────────────────────────────────────────────────────────────

/// Separator between the fields of a mapping argument.
pub const MAPPING_SEPARATOR: char = ':';

/// Replacement for one placeholder key.
///
/// `name` is a human-readable label carried along for logging; it never
/// reaches the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub value: String,
    pub name: String,
}

impl Placeholder {
    /// Parses a `<char>:<name>:<value>` argument.
    ///
    /// Every `:` splits, so a name or value containing one is rejected.
    pub fn parse_mapping(arg: &str) -> Result<(char, Placeholder), TemplaterError> {
        let malformed = |reason: &str| TemplaterError::MalformedMapping {
            arg: arg.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = arg.split(MAPPING_SEPARATOR).collect();
        let [key, name, value] = fields.as_slice() else {
            return Err(malformed(&format!(
                "expected 3 ':'-separated fields, found {}",
                fields.len()
            )));
        };

        let mut key_chars = key.chars();
        let key = match (key_chars.next(), key_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(malformed("key must be exactly one character")),
        };

        Ok((
            key,
            Placeholder {
                value: value.to_string(),
                name: name.to_string(),
            },
        ))
    }
}

/// Single-character keys mapped to their replacements. Built once, read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: HashMap<char, Placeholder>,
}

impl PlaceholderMap {
    /// Builds the map from mapping arguments, failing on the first malformed
    /// one. A repeated key keeps the last definition.
    pub fn from_args<I, S>(args: I) -> Result<Self, TemplaterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for arg in args {
            let (key, placeholder) = Placeholder::parse_mapping(arg.as_ref())?;
            entries.insert(key, placeholder);
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, key: char) -> Option<&Placeholder> {
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key, for stable log output.
    pub fn sorted_entries(&self) -> Vec<(char, &Placeholder)> {
        let mut sorted: Vec<(char, &Placeholder)> =
            self.entries.iter().map(|(k, p)| (*k, p)).collect();
        sorted.sort_unstable_by_key(|(k, _)| *k);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mapping() {
        let (key, placeholder) = Placeholder::parse_mapping("N:name:World").unwrap();
        assert_eq!(key, 'N');
        assert_eq!(placeholder.name, "name");
        assert_eq!(placeholder.value, "World");
    }

    #[test]
    fn test_parse_mapping_allows_empty_name_and_value() {
        let (key, placeholder) = Placeholder::parse_mapping("w::").unwrap();
        assert_eq!(key, 'w');
        assert!(placeholder.name.is_empty());
        assert!(placeholder.value.is_empty());
    }

    #[test]
    fn test_parse_mapping_rejects_wrong_field_count() {
        for arg in ["N", "N:name", "N:name:a:b", "U:url:http://host"] {
            assert!(matches!(
                Placeholder::parse_mapping(arg),
                Err(TemplaterError::MalformedMapping { .. })
            ));
        }
    }

    #[test]
    fn test_parse_mapping_rejects_bad_key() {
        assert!(Placeholder::parse_mapping(":name:v").is_err());
        assert!(Placeholder::parse_mapping("NN:name:v").is_err());
    }

    #[test]
    fn test_from_args_last_definition_wins() {
        let map = PlaceholderMap::from_args(["X:first:1", "Y:y:2", "X:second:3"]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.lookup('X').map(|p| p.value.as_str()), Some("3"));
        assert_eq!(map.lookup('Z'), None);
        let keys: Vec<char> = map.sorted_entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!['X', 'Y']);
    }

    #[test]
    fn test_from_args_fails_fast() {
        let err = PlaceholderMap::from_args(["X:x:1", "bad"]).unwrap_err();
        match err {
            TemplaterError::MalformedMapping { arg, .. } => assert_eq!(arg, "bad"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
