use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::casing::lowercase;
use crate::error::TableError;
use crate::table::parser::{RawEntry, parse_table};

/// A value type stored in a [`SuffixTable`], decoded from the raw string in
/// a table file.
pub trait TableValue: Sized {
    /// Returns `None` if `raw` is not a valid value for this type.
    fn decode(raw: &str) -> Option<Self>;
}

impl TableValue for String {
    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// The result of a longest-suffix lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<'n, 't, T> {
    /// The matched ending of the queried name. Empty for the fallback entry.
    pub suffix: &'n str,
    pub value: &'t T,
}

impl<T> SuffixMatch<'_, '_, T> {
    pub fn is_fallback(&self) -> bool {
        self.suffix.is_empty()
    }
}

/// A mapping from lowercase name endings to values, queried by longest match.
///
/// The entry for the empty suffix is held separately as the fallback, so every
/// lookup terminates with a value.
///
/// # Example
///
/// ```
/// use vokativ::SuffixTable;
///
/// let table: SuffixTable<String> = SuffixTable::parse(r#"
///     "" = "e";
///     "a" = "o";
///     "ek" = "ku";
/// "#).unwrap();
///
/// let matched = table.longest_match("marek");
/// assert_eq!(matched.suffix, "ek");
/// assert_eq!(matched.value, "ku");
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTable<T> {
    entries: HashMap<String, T>,
    fallback: T,
}

impl<T: TableValue> SuffixTable<T> {
    /// Parse and validate `.sfx` source.
    pub fn parse(source: &str) -> Result<Self, TableError> {
        Self::from_raw(parse_table(source)?)
    }

    /// Build a table from raw entries, decoding each value.
    pub fn from_raw(raw: impl IntoIterator<Item = RawEntry>) -> Result<Self, TableError> {
        Self::from_entries(raw.into_iter().map(|entry| -> Result<(String, T), TableError> {
            let value = T::decode(&entry.value).ok_or_else(|| TableError::UnknownTag {
                suffix: entry.suffix.clone(),
                tag: entry.value.clone(),
            })?;
            Ok((entry.suffix, value))
        }))
    }
}

impl<T> SuffixTable<T> {
    /// Build a table from already decoded `(suffix, value)` pairs.
    ///
    /// Fails if a suffix repeats, is not lowercase, or if no pair has the
    /// empty suffix.
    pub fn from_entries(
        pairs: impl IntoIterator<Item = Result<(String, T), TableError>>,
    ) -> Result<Self, TableError> {
        let mut entries = HashMap::new();
        let mut fallback = None;

        for pair in pairs {
            let (suffix, value) = pair?;
            if suffix.is_empty() {
                if fallback.replace(value).is_some() {
                    return Err(TableError::DuplicateSuffix { suffix });
                }
                continue;
            }
            if lowercase(&suffix) != suffix {
                return Err(TableError::NotLowercase { suffix });
            }
            match entries.entry(suffix) {
                Entry::Occupied(occupied) => {
                    return Err(TableError::DuplicateSuffix {
                        suffix: occupied.key().clone(),
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(value);
                }
            }
        }

        let fallback = fallback.ok_or(TableError::MissingFallback)?;
        Ok(Self { entries, fallback })
    }

    /// Find the longest suffix of `name` present in the table.
    ///
    /// Candidates are tried from the whole name down to its last character,
    /// always on character boundaries. Falls back to the empty-suffix entry.
    pub fn longest_match<'n>(&self, name: &'n str) -> SuffixMatch<'n, '_, T> {
        for (start, _) in name.char_indices() {
            let suffix = &name[start..];
            if let Some(value) = self.entries.get(suffix) {
                return SuffixMatch { suffix, value };
            }
        }
        SuffixMatch {
            suffix: "",
            value: &self.fallback,
        }
    }

    /// Get the value stored for exactly `suffix`.
    pub fn get(&self, suffix: &str) -> Option<&T> {
        if suffix.is_empty() {
            Some(&self.fallback)
        } else {
            self.entries.get(suffix)
        }
    }

    /// The value used when no non-empty suffix matches.
    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Number of entries, including the fallback.
    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Always false; a table holds at least its fallback entry.
    pub fn is_empty(&self) -> bool {
        false
    }
}
